use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ═══════════════════════════════════════════════════════════════
//  Raw response — what Datagrepper returns from /raw
// ═══════════════════════════════════════════════════════════════

/// Body of a `/raw` response. Only the fields the feed needs are read;
/// everything else (`total`, the rest of `arguments`, message bodies) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DatagrepperResponse {
    pub count: u64,
    pub pages: u64,
    pub arguments: Arguments,
    #[serde(default)]
    pub raw_messages: Vec<RawMessage>,
}

/// Echo of the request arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct Arguments {
    pub page: u64,
}

/// One event envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub msg_id: String,
    #[serde(default)]
    pub meta: Meta,
}

impl RawMessage {
    /// Flatten into a display record. `msg_id` wins over any `id` key in `meta`.
    pub fn into_message(self) -> Message {
        let mut meta = self.meta;
        meta.0.remove("id");
        Message {
            meta,
            id: self.msg_id,
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Meta — display fields requested via `meta=` parameters
// ═══════════════════════════════════════════════════════════════

/// Display fields of a message, kept verbatim. Which keys are present
/// depends on the `meta` parameters of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta(pub Map<String, Value>);

impl Meta {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String value of a field; `None` if absent or not a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

// ═══════════════════════════════════════════════════════════════
//  Normalized output
// ═══════════════════════════════════════════════════════════════

/// `meta` fields merged with `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub meta: Meta,
    pub id: String,
}

impl Message {
    pub fn subtitle(&self) -> Option<&str> {
        self.meta.text("subtitle")
    }

    pub fn link(&self) -> Option<&str> {
        self.meta.text("link")
    }

    pub fn icon(&self) -> Option<&str> {
        self.meta.text("icon")
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.text("title")
    }

    /// `date` is usually a string, but some deployments send a number.
    pub fn date(&self) -> Option<String> {
        match self.meta.get("date")? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// One page of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub pages: u64,
    pub page: u64,
    pub count: u64,
}

impl From<DatagrepperResponse> for MessagePage {
    fn from(resp: DatagrepperResponse) -> Self {
        Self {
            messages: resp
                .raw_messages
                .into_iter()
                .map(RawMessage::into_message)
                .collect(),
            pages: resp.pages,
            page: resp.arguments.page,
            count: resp.count,
        }
    }
}
