//! Middleware chain
//!
//! Middleware are appended outermost first and applied right-to-left, so
//! `Chain::new().append(a).append(b).then(h)` handles a request as
//! `a(b(h))`.

use super::BoxHandler;

type Constructor = Box<dyn Fn(BoxHandler) -> BoxHandler + Send + Sync>;

/// Ordered list of middleware constructors
#[derive(Default)]
pub struct Chain {
    constructors: Vec<Constructor>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a middleware inside the ones already in the chain
    #[must_use]
    pub fn append<M>(mut self, middleware: M) -> Self
    where
        M: Fn(BoxHandler) -> BoxHandler + Send + Sync + 'static,
    {
        self.constructors.push(Box::new(middleware));
        self
    }

    /// Wrap `handler` with every middleware, first appended outermost
    pub fn then(&self, handler: BoxHandler) -> BoxHandler {
        self.constructors
            .iter()
            .rev()
            .fold(handler, |next, constructor| constructor(next))
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("middleware", &self.constructors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::body;
    use hyper::{Request, Response};
    use std::sync::{Arc, Mutex};

    type Trace = Arc<Mutex<Vec<String>>>;

    fn tracing_middleware(name: &'static str, trace: &Trace) -> impl Fn(BoxHandler) -> BoxHandler {
        let trace = Arc::clone(trace);
        move |next: BoxHandler| -> BoxHandler {
            let trace = Arc::clone(&trace);
            Arc::new(move |req: Request<body::RequestBody>| {
                let next = Arc::clone(&next);
                let trace = Arc::clone(&trace);
                async move {
                    trace.lock().unwrap().push(format!("enter {name}"));
                    let resp = next.handle(req).await;
                    trace.lock().unwrap().push(format!("leave {name}"));
                    resp
                }
            })
        }
    }

    fn terminal(trace: &Trace) -> BoxHandler {
        let trace = Arc::clone(trace);
        Arc::new(move |_req: Request<body::RequestBody>| {
            let trace = Arc::clone(&trace);
            async move {
                trace.lock().unwrap().push("handler".to_string());
                Response::new(body::empty())
            }
        })
    }

    #[tokio::test]
    async fn test_first_appended_runs_outermost() {
        let trace = Trace::default();
        let chain = Chain::new()
            .append(tracing_middleware("logging", &trace))
            .append(tracing_middleware("cache", &trace));
        assert_eq!(chain.len(), 2);

        let handler = chain.then(terminal(&trace));
        handler
            .handle(Request::new(body::empty_request()))
            .await;

        assert_eq!(
            *trace.lock().unwrap(),
            vec![
                "enter logging",
                "enter cache",
                "handler",
                "leave cache",
                "leave logging"
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_chain_returns_handler() {
        let trace = Trace::default();
        let chain = Chain::new();
        assert!(chain.is_empty());

        chain
            .then(terminal(&trace))
            .handle(Request::new(body::empty_request()))
            .await;
        assert_eq!(*trace.lock().unwrap(), vec!["handler"]);
    }
}
