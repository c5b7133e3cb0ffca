//! Utilidades para fusionar documentos JSON de forma determinista.
//!
//! El merge es recursivo ("deep"): los mappings anidados se combinan clave
//! por clave y los escalares (y arrays) posteriores sobreescriben a los
//! anteriores en el mismo path. El orden de merge es el orden de llamada.

use serde_json::Value;

/// Deep merge: keys from `src` override keys from `dst`; nested objects are
/// merged recursively. Cuando alguno de los dos valores no es objeto, `src`
/// tiene precedencia y reemplaza el valor completo.
pub fn deep_merge(dst: &mut Value, src: &Value) {
    match (dst, src) {
        (Value::Object(d), Value::Object(s)) => {
            for (k, v) in s.iter() {
                match d.get_mut(k) {
                    Some(slot) => deep_merge(slot, v),
                    None => {
                        d.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        // Non-objects: override
        (slot, other) => *slot = other.clone(),
    }
}
