//! Structured logging value pipeline: encode application values into a
//! canonical [`fields::Value`] tree, then render it as human-readable text or JSON.

/// Value model, encoder, error-chain extraction, renderers, and the logger facade.
pub mod fields;
