//! Invocación de funciones: trait del handler + entrada del engine.
//!
//! El engine puede invocar la misma función repetidamente hasta alcanzar un
//! punto fijo, así que el handler debe ser una función pura de
//! `(input, observed)`: nada de reloj, aleatoriedad ni I/O externo en las
//! decisiones que afectan el estado deseado, o la convergencia no está
//! garantizada.

use crate::errors::CoreError;
use crate::model::FunctionRequest;
use crate::response::{FunctionResponse, ResponseBuilder};

/// Cuerpo de función invocable por el engine.
///
/// Implementaciones deben ser puras respecto a `(input, observed)`: dos
/// invocaciones con el mismo request producen el mismo response.
pub trait FunctionHandler {
    fn run(&self, req: &FunctionRequest, rsp: &mut ResponseBuilder) -> Result<(), CoreError>;
}

impl<F> FunctionHandler for F where F: Fn(&FunctionRequest, &mut ResponseBuilder) -> Result<(), CoreError>
{
    fn run(&self, req: &FunctionRequest, rsp: &mut ResponseBuilder) -> Result<(), CoreError> {
        self(req, rsp)
    }
}

/// Ejecuta una invocación completa y pliega el response.
///
/// Semántica all-or-nothing: si el handler falla, el builder se descarta con
/// todas las mutaciones acumuladas y el pase se reporta como fallido. El
/// engine reintenta en su schedule normal con el observed sin cambios.
pub fn invoke<H>(handler: &H, req: &FunctionRequest) -> Result<FunctionResponse, CoreError>
    where H: FunctionHandler + ?Sized
{
    log::debug!("invoking function, tag={}", req.meta.tag);

    let mut rsp = ResponseBuilder::new();
    match handler.run(req, &mut rsp) {
        Ok(()) => {
            let response = rsp.finish();
            log::debug!("function returned {} desired resource(s)", response.desired.len());
            Ok(response)
        }
        Err(e) => {
            log::warn!("function failed, discarding accumulated response: {e}");
            Err(e)
        }
    }
}
