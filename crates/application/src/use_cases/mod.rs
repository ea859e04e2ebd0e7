pub mod resolve_call;

pub use resolve_call::ResolveCallUseCase;
