pub mod record_extractor;
