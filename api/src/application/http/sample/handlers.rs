pub mod get_samples;
