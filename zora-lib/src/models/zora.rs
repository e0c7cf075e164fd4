use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsers::WalletAddress;

use super::graphql::{GraphQLRequest, GraphQLResponse};

pub const ALLOCATION_QUERY: &str = r#"
  query GetZoraTokenAllocation($address: [String!]!) {
    zoraTokenAllocation(
      identifierWalletAddresses: $address,
      zoraClaimContractEnv: PRODUCTION
    ) {
      totalTokensEarned {
        totalTokens
      }
    }
  }
"#;

#[derive(Debug, Serialize, Clone)]
pub struct AllocationVariables {
    pub address: Vec<WalletAddress>,
}

pub type AllocationQueryRequest = GraphQLRequest<AllocationVariables>;
pub type AllocationQueryResponse = GraphQLResponse<ZoraGraphQLData>;

impl AllocationQueryRequest {
    /// The fixed allocation query for exactly one address.
    pub fn for_address(address: WalletAddress) -> Self {
        GraphQLRequest {
            query: ALLOCATION_QUERY.to_string(),
            variables: AllocationVariables {
                address: vec![address],
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ZoraGraphQLData {
    #[serde(rename = "zoraTokenAllocation")]
    pub zora_token_allocation: Option<ZoraTokenAllocation>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ZoraTokenAllocation {
    #[serde(rename = "totalTokensEarned")]
    pub total_tokens_earned: Option<ZoraTokenEarned>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ZoraTokenEarned {
    /// `None` when the field is missing, `Some(None)` when it is `null`.
    #[serde(rename = "totalTokens", default, deserialize_with = "present_number")]
    pub total_tokens: Option<Option<f64>>,
}

/// What the upstream said about the total, before absence collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AllocationOutcome {
    Reported(f64),
    ExplicitNull,
    Absent,
}

impl AllocationOutcome {
    pub fn total(&self) -> f64 {
        match self {
            AllocationOutcome::Reported(total) => *total,
            AllocationOutcome::ExplicitNull | AllocationOutcome::Absent => 0.0,
        }
    }
}

impl AllocationQueryResponse {
    pub fn allocation_outcome(&self) -> AllocationOutcome {
        let total = self
            .data
            .as_ref()
            .and_then(|data| data.zora_token_allocation.as_ref())
            .and_then(|allocation| allocation.total_tokens_earned.as_ref())
            .and_then(|earned| earned.total_tokens);
        match total {
            Some(Some(total)) => AllocationOutcome::Reported(total),
            Some(None) => AllocationOutcome::ExplicitNull,
            None => AllocationOutcome::Absent,
        }
    }
}

fn present_number<'de, D>(de: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let helper: Value = Deserialize::deserialize(de)?;

    match helper {
        Value::Null => Ok(Some(None)),
        Value::Number(n) => Ok(Some(n.as_f64())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(|n| Some(Some(n)))
            .map_err(|_| serde::de::Error::custom(format!("totalTokens is not numeric: {}", s))),
        other => Err(serde::de::Error::custom(format!(
            "totalTokens has unexpected type: {}",
            other
        ))),
    }
}
