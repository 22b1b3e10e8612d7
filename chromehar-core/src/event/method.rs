use std::fmt::{Display, Formatter};

/// The DevTools events that take part in network reconstruction.
///
/// Every other method name in a capture is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventMethod {
    RequestWillBeSent,
    ResponseReceived,
    DataReceived,
    LoadingFinished,
    DomContentEventFired,
    LoadEventFired,
}

impl EventMethod {
    pub const ALL: [EventMethod; 6] = [
        EventMethod::RequestWillBeSent,
        EventMethod::ResponseReceived,
        EventMethod::DataReceived,
        EventMethod::LoadingFinished,
        EventMethod::DomContentEventFired,
        EventMethod::LoadEventFired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestWillBeSent => "Network.requestWillBeSent",
            Self::ResponseReceived => "Network.responseReceived",
            Self::DataReceived => "Network.dataReceived",
            Self::LoadingFinished => "Network.loadingFinished",
            Self::DomContentEventFired => "Page.domContentEventFired",
            Self::LoadEventFired => "Page.loadEventFired",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl Display for EventMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
