//! Scripted transport and response builders shared by the net tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::client::{ApiClient, HttpRequest, HttpResponse, Transport};
use crate::state::session::SessionStore;

/// Records every issued request and replays scripted responses in order.
#[derive(Default)]
pub struct FakeTransport {
    pub responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn request_urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

/// Client over an isolated in-memory session and the given response script.
pub fn client_with(responses: Vec<Result<HttpResponse, String>>) -> (ApiClient, Rc<FakeTransport>) {
    client_with_base("", responses)
}

/// Same as [`client_with`] with an explicit base URL.
pub fn client_with_base(
    base_url: &str,
    responses: Vec<Result<HttpResponse, String>>,
) -> (ApiClient, Rc<FakeTransport>) {
    let fake = Rc::new(FakeTransport {
        responses: RefCell::new(responses.into()),
        requests: RefCell::new(Vec::new()),
    });
    let transport_fake = Rc::clone(&fake);
    let transport: Transport = Rc::new(move |request| {
        transport_fake.requests.borrow_mut().push(request);
        let next = transport_fake.responses.borrow_mut().pop_front();
        Box::pin(async move { next.unwrap_or_else(|| Err("no scripted response".to_owned())) })
    });
    let client = ApiClient::with_transport(base_url, SessionStore::in_memory(), transport);
    (client, fake)
}

pub fn json_response(status: u16, body: &str) -> Result<HttpResponse, String> {
    Ok(HttpResponse {
        status,
        content_type: Some("application/json".to_owned()),
        body: body.to_owned(),
    })
}

pub fn text_response(status: u16, body: &str) -> Result<HttpResponse, String> {
    Ok(HttpResponse {
        status,
        content_type: Some("text/plain".to_owned()),
        body: body.to_owned(),
    })
}

pub fn empty_response(status: u16) -> Result<HttpResponse, String> {
    Ok(HttpResponse {
        status,
        content_type: None,
        body: String::new(),
    })
}
