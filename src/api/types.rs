use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot returned by the now-playing endpoint.
///
/// Every field is optional on the wire; a missing `playing` means nothing is playing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    #[serde(default)]
    pub playing: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub device: Option<String>,
    /// Device volume (0-100)
    #[serde(default)]
    pub volume: Option<u8>,
    #[serde(default)]
    pub device_active: Option<bool>,
    /// Set by the backend when nothing is playing
    #[serde(default)]
    pub message: Option<String>,
}

/// A playback command triggered by the user 🎛️
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRequest {
    Previous,
    Next,
    PlayPause,
    Volume { delta: i32 },
}

#[derive(Debug, Serialize)]
struct VolumeBody {
    delta: i32,
}

impl CommandRequest {
    /// Endpoint path for this command
    pub fn path<'a>(&self, endpoints: &'a Endpoints) -> &'a str {
        match self {
            CommandRequest::Previous => &endpoints.previous,
            CommandRequest::Next => &endpoints.next,
            CommandRequest::PlayPause => &endpoints.play_pause,
            CommandRequest::Volume { .. } => &endpoints.volume,
        }
    }

    /// JSON body sent with the command, if any
    pub fn body(&self) -> Option<Value> {
        match self {
            CommandRequest::Volume { delta } => {
                serde_json::to_value(VolumeBody { delta: *delta }).ok()
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommandRequest::Previous => "previous",
            CommandRequest::Next => "next",
            CommandRequest::PlayPause => "play_pause",
            CommandRequest::Volume { .. } => "volume",
        }
    }
}

/// Backend paths, relative to the base URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub now_playing: String,
    pub previous: String,
    pub next: String,
    pub play_pause: String,
    pub volume: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            now_playing: "/api/now_playing".to_string(),
            previous: "/api/previous".to_string(),
            next: "/api/next".to_string(),
            play_pause: "/api/play_pause".to_string(),
            volume: "/api/volume".to_string(),
        }
    }
}

/// Status and decoded body of a completed request.
///
/// Bodies that were not served as JSON are an empty object.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn empty(status: u16) -> Self {
        Self::new(status, Value::Object(Default::default()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `retry_after` from a 429 body. Missing or zero falls back to one second.
    pub fn retry_after(&self) -> u64 {
        let secs = match self.body.get("retry_after") {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().map(|f| f.max(0.0).ceil() as u64)),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        match secs {
            Some(n) if n > 0 => n,
            _ => 1,
        }
    }

    /// Human-readable `error` field. Accepts a plain string or an object with `message`.
    pub fn error_message(&self) -> Option<String> {
        let text = match self.body.get("error")? {
            Value::String(s) => s.as_str(),
            Value::Object(obj) => obj.get("message")?.as_str()?,
            _ => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_not_playing() {
        let state: PlaybackState = serde_json::from_value(json!({})).unwrap();
        assert!(!state.playing);
        assert!(state.title.is_none());
    }

    #[test]
    fn test_full_backend_payload() {
        let state: PlaybackState = serde_json::from_value(json!({
            "playing": true,
            "title": "Song A",
            "artist": "Artist X, Artist Y",
            "album": "Album",
            "image_url": "http://img/cover.jpg",
            "progress_ms": 1000,
            "duration_ms": 200000,
            "device": "Kitchen",
            "volume": 40,
            "device_active": true
        }))
        .unwrap();
        assert!(state.playing);
        assert_eq!(state.artist.as_deref(), Some("Artist X, Artist Y"));
        assert_eq!(state.volume, Some(40));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let state: PlaybackState =
            serde_json::from_value(json!({"playing": true, "image_url": null, "volume": null}))
                .unwrap();
        assert!(state.image_url.is_none());
        assert!(state.volume.is_none());
    }

    #[test]
    fn test_command_paths_and_bodies() {
        let endpoints = Endpoints::default();
        assert_eq!(CommandRequest::Previous.path(&endpoints), "/api/previous");
        assert_eq!(CommandRequest::Next.path(&endpoints), "/api/next");
        assert_eq!(CommandRequest::PlayPause.path(&endpoints), "/api/play_pause");
        assert_eq!(CommandRequest::PlayPause.body(), None);

        let vol = CommandRequest::Volume { delta: -10 };
        assert_eq!(vol.path(&endpoints), "/api/volume");
        assert_eq!(vol.body(), Some(json!({"delta": -10})));
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(ApiReply::new(429, json!({"retry_after": 5})).retry_after(), 5);
        assert_eq!(ApiReply::new(429, json!({"retry_after": "7"})).retry_after(), 7);
        assert_eq!(ApiReply::new(429, json!({"retry_after": 0})).retry_after(), 1);
        assert_eq!(ApiReply::empty(429).retry_after(), 1);
    }

    #[test]
    fn test_error_message_shapes() {
        let plain = ApiReply::new(500, json!({"error": "boom"}));
        assert_eq!(plain.error_message().as_deref(), Some("boom"));

        let nested = ApiReply::new(404, json!({"error": {"status": 404, "message": "No device"}}));
        assert_eq!(nested.error_message().as_deref(), Some("No device"));

        assert_eq!(ApiReply::new(500, json!({"error": ""})).error_message(), None);
        assert_eq!(ApiReply::empty(502).error_message(), None);
    }
}
