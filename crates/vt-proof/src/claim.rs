//! # Raw Verification Result
//!
//! The data model of the external SDK's response. Field names follow the
//! SDK's wire format (camelCase), with loosely typed blobs kept as
//! `serde_json::Value` where providers disagree about shape.
//!
//! Also defines the on-chain claim submission envelope: the contract
//! expects `parameters` and `context` re-stringified, with the claim
//! identity and signatures in a separate signed envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use vt_core::Timestamp;

use crate::payload::to_json_string;

/// The opaque payload returned by one external verification call.
///
/// Owned exclusively by the session controller for the duration of one
/// verification attempt and discarded after the result is reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationResult {
    /// One or more proof records. The session consumes the first.
    #[serde(default)]
    pub proofs: Vec<ProofRecord>,
}

/// One proof record inside a verification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofRecord {
    /// The structured assertion about the verified web response.
    #[serde(rename = "claimData")]
    pub claim_data: ClaimData,
    /// Signatures over the claim, carried verbatim.
    #[serde(default)]
    pub signatures: Vec<String>,
}

/// The SDK's structured assertion about a verified web response.
///
/// `parameters` and `context` are loosely typed: depending on the
/// provider they arrive as objects, JSON-encoded strings, or
/// double-encoded strings. They are kept as raw values here and only
/// interpreted by the payload decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimData {
    /// Claim provider identifier (e.g., an HTTP provider profile name).
    #[serde(default)]
    pub provider: String,
    /// Provider parameters blob.
    #[serde(default)]
    pub parameters: Value,
    /// Context blob carrying the extracted parameters.
    #[serde(default)]
    pub context: Value,
    /// Claim identifier.
    #[serde(default)]
    pub identifier: String,
    /// Address of the claim owner.
    #[serde(default)]
    pub owner: String,
    /// Attestor epoch the claim was created in.
    #[serde(default)]
    pub epoch: u64,
    /// Claim creation time, Unix epoch seconds.
    #[serde(rename = "timestampS", default)]
    pub timestamp_s: i64,
}

impl ClaimData {
    /// The claim creation time as a UTC timestamp, when in range.
    pub fn created_at(&self) -> Option<Timestamp> {
        Timestamp::from_epoch_secs(self.timestamp_s).ok()
    }
}

/// Claim identity and parameters with blobs re-stringified for the
/// contract wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimInfo {
    /// Claim provider identifier.
    pub provider: String,
    /// Parameters blob as a JSON string.
    pub parameters: String,
    /// Context blob as a JSON string.
    pub context: String,
}

impl ClaimInfo {
    /// Build the claim info from a proof record, stringifying the
    /// parameters and context blobs.
    pub fn from_proof(proof: &ProofRecord) -> Self {
        Self {
            provider: proof.claim_data.provider.clone(),
            parameters: to_json_string(&proof.claim_data.parameters),
            context: to_json_string(&proof.claim_data.context),
        }
    }
}

/// The claim identity fields covered by the attestor signatures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedClaimBody {
    /// Claim identifier.
    pub identifier: String,
    /// Address of the claim owner.
    pub owner: String,
    /// Attestor epoch.
    pub epoch: u64,
    /// Claim creation time, Unix epoch seconds.
    #[serde(rename = "timestampS")]
    pub timestamp_s: i64,
}

/// The signed claim envelope submitted on-chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedClaim {
    /// The claim identity fields.
    pub claim: SignedClaimBody,
    /// Attestor signatures, verbatim.
    pub signatures: Vec<String>,
}

impl SignedClaim {
    /// Build the signed claim envelope from a proof record.
    pub fn from_proof(proof: &ProofRecord) -> Self {
        Self {
            claim: SignedClaimBody {
                identifier: proof.claim_data.identifier.clone(),
                owner: proof.claim_data.owner.clone(),
                epoch: proof.claim_data.epoch,
                timestamp_s: proof.claim_data.timestamp_s,
            },
            signatures: proof.signatures.clone(),
        }
    }
}

/// The execute message recording a verified claim on-chain.
///
/// Shape is dictated by the contract: `update.value.proof` wrapping the
/// claim info and signed claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteMsg {
    /// The update operation.
    pub update: ExecuteUpdate,
}

/// Inner update operation of [`ExecuteMsg`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteUpdate {
    /// The value being recorded.
    pub value: ExecuteValue,
}

/// Inner value of [`ExecuteUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteValue {
    /// The proof payload: claim info plus signed claim.
    pub proof: ExecuteProof,
}

/// The proof body of the execute message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteProof {
    /// Claim provider, parameters, and context (stringified).
    #[serde(rename = "claimInfo")]
    pub claim_info: ClaimInfo,
    /// Claim identity and signatures.
    #[serde(rename = "signedClaim")]
    pub signed_claim: SignedClaim,
}

impl ExecuteMsg {
    /// Assemble the full execute message from a proof record.
    pub fn from_proof(proof: &ProofRecord) -> Self {
        Self {
            update: ExecuteUpdate {
                value: ExecuteValue {
                    proof: ExecuteProof {
                        claim_info: ClaimInfo::from_proof(proof),
                        signed_claim: SignedClaim::from_proof(proof),
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_proof() -> ProofRecord {
        ProofRecord {
            claim_data: ClaimData {
                provider: "http".into(),
                parameters: json!({"url": "https://rare-t.example/orders"}),
                context: json!({"extractedParameters": {"count": "1"}}),
                identifier: "0xclaim".into(),
                owner: "0xowner".into(),
                epoch: 1,
                timestamp_s: 1_735_689_600,
            },
            signatures: vec!["0xsig".into()],
        }
    }

    #[test]
    fn test_deserialize_sdk_wire_format() {
        let raw = json!({
            "proofs": [{
                "claimData": {
                    "provider": "http",
                    "parameters": "{\"url\":\"x\"}",
                    "context": "{\"extractedParameters\":{}}",
                    "identifier": "0xabc",
                    "owner": "0xdef",
                    "epoch": 2,
                    "timestampS": 1700000000
                },
                "signatures": ["0x01"]
            }]
        });
        let result: VerificationResult = serde_json::from_value(raw).unwrap();
        assert_eq!(result.proofs.len(), 1);
        let proof = &result.proofs[0];
        assert_eq!(proof.claim_data.epoch, 2);
        assert_eq!(proof.claim_data.timestamp_s, 1_700_000_000);
        assert!(proof.claim_data.parameters.is_string());
    }

    #[test]
    fn test_missing_fields_default() {
        let raw = json!({"proofs": [{"claimData": {}}]});
        let result: VerificationResult = serde_json::from_value(raw).unwrap();
        let proof = &result.proofs[0];
        assert_eq!(proof.claim_data.provider, "");
        assert!(proof.claim_data.context.is_null());
        assert!(proof.signatures.is_empty());
    }

    #[test]
    fn test_created_at() {
        let proof = sample_proof();
        assert_eq!(
            proof.claim_data.created_at().unwrap().to_iso8601(),
            "2025-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_claim_info_stringifies_blobs() {
        let info = ClaimInfo::from_proof(&sample_proof());
        assert!(info.parameters.contains("rare-t.example"));
        // Stringified blobs parse back to JSON.
        let reparsed: serde_json::Value = serde_json::from_str(&info.context).unwrap();
        assert!(reparsed.get("extractedParameters").is_some());
    }

    #[test]
    fn test_execute_msg_shape() {
        let msg = ExecuteMsg::from_proof(&sample_proof());
        let wire = serde_json::to_value(&msg).unwrap();
        let proof = &wire["update"]["value"]["proof"];
        assert_eq!(proof["signedClaim"]["claim"]["identifier"], "0xclaim");
        assert_eq!(proof["signedClaim"]["claim"]["timestampS"], 1_735_689_600);
        assert!(proof["claimInfo"]["context"].is_string());
    }
}
