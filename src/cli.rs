use clap::Parser;
use std::path::PathBuf;

use crate::annotate::client::DEFAULT_ENDPOINT;
use crate::annotate::types::Feature;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// GCS URI of the source video (gs://bucket/object)
    #[arg(long)]
    pub input_uri: String,

    /// GCS prefix the annotation document is written under (gs://bucket/prefix)
    #[arg(long)]
    pub output_prefix: String,

    /// Service-account key file; ambient credentials when omitted
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Analysis feature to request (repeatable)
    #[arg(long = "feature", value_enum, default_value = "logo-recognition")]
    pub features: Vec<Feature>,

    /// Hard deadline for the blocking wait, in seconds
    #[arg(long, default_value_t = 300)]
    pub timeout_secs: u64,

    /// Seconds between operation polls
    #[arg(long, default_value_t = 10)]
    pub poll_interval_secs: u64,

    /// Transcription language code
    #[arg(long, default_value = "en-US")]
    pub speech_language: String,

    /// Punctuate transcripts automatically
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub speech_punctuation: bool,

    /// Include bounding boxes in person detection
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub person_bounding_boxes: bool,

    /// Include attributes in person detection
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    pub person_attributes: bool,

    /// Include pose landmarks in person detection
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub person_pose_landmarks: bool,

    /// Include bounding boxes in face detection
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub face_bounding_boxes: bool,

    /// Include attributes in face detection
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub face_attributes: bool,

    /// Video Intelligence API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
