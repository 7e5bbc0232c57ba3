//! Test doubles for the request layer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tokio::sync::oneshot;

use crate::client::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

enum FakeReply {
    Ready(Result<HttpResponse, ApiError>),
    /// Held back until the paired sender fires, so a test can interleave a
    /// logout with an in-flight request.
    Gated(oneshot::Receiver<()>, Result<HttpResponse, ApiError>),
}

#[derive(Default)]
struct Inner {
    replies: RefCell<VecDeque<FakeReply>>,
    requests: RefCell<Vec<HttpRequest>>,
}

/// Transport that records every request and serves queued replies in order.
/// Clones share the same queue and log.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Rc<Inner>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &str) {
        self.inner
            .replies
            .borrow_mut()
            .push_back(FakeReply::Ready(Ok(HttpResponse {
                status,
                body: body.to_string(),
            })));
    }

    pub fn push_error(&self, error: ApiError) {
        self.inner
            .replies
            .borrow_mut()
            .push_back(FakeReply::Ready(Err(error)));
    }

    /// Queue a reply that is only delivered once the returned sender fires.
    pub fn push_gated(&self, status: u16, body: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner
            .replies
            .borrow_mut()
            .push_back(FakeReply::Gated(
                rx,
                Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
            ));
        tx
    }

    pub fn request(&self, index: usize) -> HttpRequest {
        self.inner.requests.borrow()[index].clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.borrow().len()
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.inner.requests.borrow_mut().push(request);
        let reply = self
            .inner
            .replies
            .borrow_mut()
            .pop_front()
            .expect("request issued with no queued reply");
        match reply {
            FakeReply::Ready(result) => result,
            FakeReply::Gated(gate, result) => {
                let _ = gate.await;
                result
            }
        }
    }
}
