// Request assembly: URI validation, timestamped output naming, and the
// immutable annotation request built from the CLI arguments.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::annotate::types::{
    AnnotateVideoRequest, FaceDetectionConfig, PersonDetectionConfig,
    SpeechTranscriptionConfig, VideoContext,
};
use crate::cli::Args;

/// Splits a well-formed `gs://bucket/object` URI into bucket and object.
pub fn parse_gcs_uri(uri: &str) -> Result<(&str, &str)> {
    let rest = uri
        .strip_prefix("gs://")
        .ok_or_else(|| anyhow::anyhow!("not a gs:// URI: {uri}"))?;
    let (bucket, object) = rest
        .split_once('/')
        .ok_or_else(|| anyhow::anyhow!("URI has no object path: {uri}"))?;
    if bucket.is_empty() || object.is_empty() {
        anyhow::bail!("URI has an empty bucket or object: {uri}");
    }
    Ok((bucket, object))
}

/// Destination object for one submission. The unix-millis token keeps runs
/// started at different instants from overwriting each other's output.
pub fn output_object_uri(prefix: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}/annotations-{}.json",
        prefix.trim_end_matches('/'),
        at.timestamp_millis()
    )
}

/// Builds the annotation request. The result carries exactly the features the
/// arguments named, plus the three config bundles the original workflow
/// always attaches (inert unless their feature is requested).
pub fn build_request(args: &Args, at: DateTime<Utc>) -> Result<AnnotateVideoRequest> {
    parse_gcs_uri(&args.input_uri)?;
    let output_uri = output_object_uri(&args.output_prefix, at);
    parse_gcs_uri(&output_uri)?;

    if args.features.is_empty() {
        anyhow::bail!("at least one feature is required");
    }

    let context = VideoContext {
        speech_transcription_config: Some(SpeechTranscriptionConfig {
            language_code: args.speech_language.clone(),
            enable_automatic_punctuation: args.speech_punctuation,
        }),
        person_detection_config: Some(PersonDetectionConfig {
            include_bounding_boxes: args.person_bounding_boxes,
            include_attributes: args.person_attributes,
            include_pose_landmarks: args.person_pose_landmarks,
        }),
        face_detection_config: Some(FaceDetectionConfig {
            include_bounding_boxes: args.face_bounding_boxes,
            include_attributes: args.face_attributes,
        }),
    };

    Ok(AnnotateVideoRequest {
        input_uri: args.input_uri.clone(),
        output_uri,
        features: args.features.clone(),
        video_context: Some(context),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::types::Feature;
    use chrono::TimeZone;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["vi-submit"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_parse_gcs_uri() {
        assert_eq!(
            parse_gcs_uri("gs://bucket/video.mp4").unwrap(),
            ("bucket", "video.mp4")
        );
        assert_eq!(
            parse_gcs_uri("gs://bucket/nested/path video.mp4").unwrap(),
            ("bucket", "nested/path video.mp4")
        );
        assert!(parse_gcs_uri("s3://bucket/video.mp4").is_err());
        assert!(parse_gcs_uri("gs://bucket-only").is_err());
        assert!(parse_gcs_uri("gs:///video.mp4").is_err());
        assert!(parse_gcs_uri("gs://bucket/").is_err());
    }

    #[test]
    fn test_output_uris_differ_across_timestamps() {
        let t0 = Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap();
        let t1 = t0 + chrono::Duration::milliseconds(1);
        let a = output_object_uri("gs://bucket/results", t0);
        let b = output_object_uri("gs://bucket/results", t1);
        assert_ne!(a, b);
        assert!(a.starts_with("gs://bucket/results/annotations-"));
        assert!(a.ends_with(".json"));
    }

    #[test]
    fn test_trailing_slash_in_prefix_does_not_double_up() {
        let t = Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap();
        assert_eq!(
            output_object_uri("gs://bucket/results/", t),
            output_object_uri("gs://bucket/results", t)
        );
    }

    #[test]
    fn test_request_carries_exactly_the_configured_features() {
        let args = args(&[
            "--input-uri",
            "gs://bucket/video.mp4",
            "--output-prefix",
            "gs://bucket/results",
            "--feature",
            "logo-recognition",
            "--feature",
            "speech-transcription",
        ]);
        let request = build_request(&args, Utc::now()).unwrap();
        assert_eq!(
            request.features,
            vec![Feature::LogoRecognition, Feature::SpeechTranscription]
        );
        assert_eq!(request.input_uri, "gs://bucket/video.mp4");
    }

    #[test]
    fn test_default_feature_is_logo_recognition() {
        let args = args(&[
            "--input-uri",
            "gs://bucket/video.mp4",
            "--output-prefix",
            "gs://bucket/results",
        ]);
        let request = build_request(&args, Utc::now()).unwrap();
        assert_eq!(request.features, vec![Feature::LogoRecognition]);
    }

    #[test]
    fn test_context_bundles_follow_the_flags() {
        let args = args(&[
            "--input-uri",
            "gs://bucket/video.mp4",
            "--output-prefix",
            "gs://bucket/results",
            "--speech-language",
            "fr-FR",
            "--person-attributes",
            "true",
            "--face-attributes",
            "false",
        ]);
        let request = build_request(&args, Utc::now()).unwrap();
        let context = request.video_context.unwrap();
        let speech = context.speech_transcription_config.unwrap();
        assert_eq!(speech.language_code, "fr-FR");
        assert!(speech.enable_automatic_punctuation);
        let person = context.person_detection_config.unwrap();
        assert!(person.include_bounding_boxes);
        assert!(person.include_attributes);
        assert!(person.include_pose_landmarks);
        let face = context.face_detection_config.unwrap();
        assert!(face.include_bounding_boxes);
        assert!(!face.include_attributes);
    }

    #[test]
    fn test_malformed_input_uri_is_a_construction_error() {
        let args = args(&[
            "--input-uri",
            "/local/video.mp4",
            "--output-prefix",
            "gs://bucket/results",
        ]);
        assert!(build_request(&args, Utc::now()).is_err());
    }

    #[test]
    fn test_malformed_output_prefix_is_a_construction_error() {
        let args = args(&[
            "--input-uri",
            "gs://bucket/video.mp4",
            "--output-prefix",
            "results",
        ]);
        assert!(build_request(&args, Utc::now()).is_err());
    }
}
