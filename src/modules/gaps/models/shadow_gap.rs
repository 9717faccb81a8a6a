use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One unrealized-savings opportunity. Derived, stateless, regenerated on
/// every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowGap {
    pub opportunity_name: String,
    pub current_spend: Decimal,
    /// `None` means the opportunity has no statutory ceiling
    pub max_limit: Option<Decimal>,
    pub potential_savings: Decimal,
    /// 1 = highest
    pub priority: u8,
    pub action: String,
}
