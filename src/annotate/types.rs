// Wire model for the Video Intelligence v1 REST surface.
//
// These structs are pure data: the service validates feature configuration
// server-side, so nothing here is checked beyond shape. Request types
// serialize to camelCase JSON; the operation resource deserializes from it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Analysis capability requested from the service, spelled as the v1 wire tag.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    LabelDetection,
    ShotChangeDetection,
    ExplicitContentDetection,
    SpeechTranscription,
    TextDetection,
    ObjectTracking,
    LogoRecognition,
    FaceDetection,
    PersonDetection,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpeechTranscriptionConfig {
    pub language_code: String,
    pub enable_automatic_punctuation: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetectionConfig {
    pub include_bounding_boxes: bool,
    pub include_attributes: bool,
    pub include_pose_landmarks: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetectionConfig {
    pub include_bounding_boxes: bool,
    pub include_attributes: bool,
}

/// Per-feature configuration attached to a request. `None` fields are omitted
/// from the wire. The service ignores configuration for features that were
/// not requested, so an attached config with no matching feature is inert.
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_transcription_config: Option<SpeechTranscriptionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_detection_config: Option<PersonDetectionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_detection_config: Option<FaceDetectionConfig>,
}

/// One annotation request. Built once per run, never mutated after that.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateVideoRequest {
    pub input_uri: String,
    pub output_uri: String,
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_context: Option<VideoContext>,
}

/// `google.rpc.Status` carried by an operation that resolved with an error.
#[derive(Deserialize, Debug, Clone)]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// Long-running operation resource: the opaque handle to server-side work.
/// The response payload stays a raw JSON value and is never inspected beyond
/// presence.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<Status>,
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}
