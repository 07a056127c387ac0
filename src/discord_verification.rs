
use ed25519_dalek::{Signature, Verifier, VerifyingKey, SIGNATURE_LENGTH};
use thiserror::Error;

use crate::incoming_request::IncomingRequest;

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("signature is not valid hex")]
    SignatureHex(#[source] hex::FromHexError),
    #[error("signature is {0} bytes, expected 64")]
    SignatureLength(usize),
    #[error("public key is not valid hex")]
    PublicKeyHex(#[source] hex::FromHexError),
    #[error("public key is not a valid ed25519 key")]
    PublicKey,
    #[error("signature does not match")]
    Mismatch,
}

pub struct Verification<'a> {
    pub authentic: bool,
    pub body: &'a [u8],
}

// https://discord.com/developers/docs/interactions/receiving-and-responding#security-and-authorization
// Every failure collapses into `authentic: false`. Nothing in here returns an
// error to the handler.
pub fn verify_discord_request<'a>(request: &'a IncomingRequest, public_key_hex: &str) -> Verification<'a> {
    let signature = request.header(SIGNATURE_HEADER);
    let timestamp = request.header(TIMESTAMP_HEADER);
    let body = request.body.as_slice();
    let authentic = match verify_signature(signature, timestamp, body, public_key_hex) {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!("interaction signature rejected: {}", error);
            false
        }
    };
    Verification { authentic, body }
}

fn verify_signature(signature_hex: &str, timestamp: &str, body: &[u8], public_key_hex: &str) -> Result<(), VerificationError> {
    let signature_bytes = hex::decode(signature_hex).map_err(VerificationError::SignatureHex)?;
    let signature_array: [u8; SIGNATURE_LENGTH] = signature_bytes
        .as_slice()
        .try_into()
        .map_err(|_| VerificationError::SignatureLength(signature_bytes.len()))?;
    let public_key_bytes = hex::decode(public_key_hex).map_err(VerificationError::PublicKeyHex)?;
    let public_key_array: [u8; 32] = public_key_bytes
        .as_slice()
        .try_into()
        .map_err(|_| VerificationError::PublicKey)?;
    let public_key = VerifyingKey::from_bytes(&public_key_array).map_err(|_| VerificationError::PublicKey)?;
    let signature = Signature::from_bytes(&signature_array);
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    public_key
        .verify(&message, &signature)
        .map_err(|_| VerificationError::Mismatch)
}
