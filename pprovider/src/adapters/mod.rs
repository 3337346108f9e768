#[cfg(feature = "provider-openai")]
pub mod openai;

#[cfg(feature = "provider-mistral")]
pub mod mistral;
