use log::{debug, error, warn};

use crate::{
    error::{LookupError, TransportError},
    external_services::proxy::{ProxyReply, ProxyTransport},
    helpers::format_token_amount,
    models::{
        graphql::GraphQLResponse,
        zora::{AllocationOutcome, AllocationQueryRequest, AllocationQueryResponse},
    },
    parsers::WalletAddress,
};

use super::locale::Locale;

/// The one thing the lookup form is showing. Being a single enum, an error
/// and a result can never be visible together.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Idle,
    Loading,
    Error(String),
    Result(f64),
}

/// Which panel the form renders under the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    None,
    Error(String),
    Result(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupView<'a> {
    pub locale: Locale,
    pub address: &'a str,
    pub busy: bool,
    pub can_submit: bool,
    pub panel: Panel,
}

impl LookupView<'static> {
    /// An untouched form: empty input, nothing shown.
    pub fn idle(locale: Locale) -> Self {
        LookupView {
            locale,
            address: "",
            busy: false,
            can_submit: false,
            panel: Panel::None,
        }
    }
}

/// Form state of the allocation lookup: the typed address plus the current
/// [`LookupState`].
///
/// A lookup holds `&mut self` until it settles, so a single form never has
/// two requests in flight.
pub struct AllocationLookup<T: ProxyTransport> {
    transport: T,
    locale: Locale,
    address: String,
    state: LookupState,
}

impl<T: ProxyTransport> AllocationLookup<T> {
    pub fn new(transport: T, locale: Locale) -> Self {
        AllocationLookup {
            transport,
            locale,
            address: String::new(),
            state: LookupState::Idle,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_busy(&self) -> bool {
        self.state == LookupState::Loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.address.trim().is_empty()
    }

    /// An edit to the input. Drops a shown error or result; the input is
    /// disabled while busy, so edits during a lookup are ignored.
    pub fn set_address(&mut self, text: impl Into<String>) {
        if self.is_busy() {
            return;
        }
        self.address = text.into();
        if matches!(self.state, LookupState::Error(_) | LookupState::Result(_)) {
            self.state = LookupState::Idle;
        }
    }

    /**
     * Validate the current input and enter `Loading`
     *
     * # Returns
     * @return Option<AllocationQueryRequest> - The request to send, or `None`
     * when validation failed (state is now `Error`) or a lookup is already
     * in flight
     */
    pub fn begin(&mut self) -> Option<AllocationQueryRequest> {
        if self.is_busy() {
            return None;
        }
        match WalletAddress::parse(&self.address) {
            Ok(address) => {
                self.state = LookupState::Loading;
                Some(AllocationQueryRequest::for_address(address))
            }
            Err(e) => {
                debug!("Rejected lookup input: {}", e);
                self.fail(LookupError::InvalidAddress(e));
                None
            }
        }
    }

    /// Leave `Loading` with whatever the proxy answered.
    pub fn settle(&mut self, reply: Result<ProxyReply, TransportError>) {
        if !self.is_busy() {
            return;
        }
        match interpret_reply(reply) {
            Ok(outcome) => {
                if !matches!(outcome, AllocationOutcome::Reported(_)) {
                    debug!("No total reported ({:?}), showing 0", outcome);
                }
                self.state = LookupState::Result(outcome.total());
            }
            Err(e) => self.fail(e),
        }
    }

    /// Validate, send and settle one lookup.
    pub async fn lookup(&mut self) -> &LookupState {
        if let Some(request) = self.begin() {
            let reply = self.transport.post(&request).await;
            self.settle(reply);
        }
        &self.state
    }

    pub fn view(&self) -> LookupView<'_> {
        let busy = self.is_busy();
        let panel = match &self.state {
            LookupState::Error(message) => Panel::Error(message.clone()),
            LookupState::Result(total) if !busy => {
                Panel::Result(format_token_amount(*total, self.locale))
            }
            _ => Panel::None,
        };
        LookupView {
            locale: self.locale,
            address: &self.address,
            busy,
            can_submit: self.can_submit(),
            panel,
        }
    }

    fn fail(&mut self, e: LookupError) {
        self.state = LookupState::Error(e.user_message(self.locale));
    }
}

fn interpret_reply(
    reply: Result<ProxyReply, TransportError>,
) -> Result<AllocationOutcome, LookupError> {
    let reply = reply.map_err(|e| {
        error!("Token lookup error (client): {}", e);
        LookupError::Network(e.to_string())
    })?;

    if !reply.is_success() {
        warn!(
            "Proxy request returned non-OK status: {} {:?}",
            reply.status, reply.body
        );
        let message = reply.body.as_ref().ok().and_then(first_error_message);
        return Err(LookupError::UpstreamHttp {
            status: reply.status,
            message,
        });
    }

    let body = reply.body.map_err(|e| {
        error!("Proxy reply is not JSON: {}", e);
        LookupError::MalformedResponse(e)
    })?;
    // Errors are read before the data shape is checked, so a reply carrying
    // both an error list and unexpected data still reports the errors.
    let envelope: GraphQLResponse<serde_json::Value> = serde_json::from_value(body.clone())
        .map_err(|e| {
            error!("Proxy reply is not a GraphQL response: {}", e);
            LookupError::MalformedResponse(e.to_string())
        })?;

    if let Some(errors) = envelope.errors() {
        error!("GraphQL errors (from proxy): {:?}", errors);
        let message = errors
            .first()
            .map(|e| e.message.clone())
            .filter(|m| !m.is_empty());
        return Err(LookupError::UpstreamGraphQL(message));
    }

    let response: AllocationQueryResponse = serde_json::from_value(body).map_err(|e| {
        error!("Proxy reply has unexpected shape: {}", e);
        LookupError::MalformedResponse(e.to_string())
    })?;

    Ok(response.allocation_outcome())
}

fn first_error_message(body: &serde_json::Value) -> Option<String> {
    body.pointer("/errors/0/message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(String::from)
}
