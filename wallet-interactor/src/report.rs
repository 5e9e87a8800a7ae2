use alloy::primitives::U256;
use std::fmt;
use wallet_utils::unit;

const ETHER_DECIMALS: u8 = 18;

/// A balance difference kept as sign and magnitude. Zero is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedAmount {
    pub negative: bool,
    pub magnitude: U256,
}

impl SignedAmount {
    pub fn plus(magnitude: U256) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    pub fn minus(magnitude: U256) -> Self {
        Self {
            negative: !magnitude.is_zero(),
            magnitude,
        }
    }

    /// `to - from`.
    pub fn between(from: U256, to: U256) -> Self {
        let magnitude = from.abs_diff(to);
        if to >= from {
            Self::plus(magnitude)
        } else {
            Self::minus(magnitude)
        }
    }

    fn sign(&self, f: &fmt::Formatter<'_>) -> &'static str {
        if self.negative {
            "-"
        } else if f.sign_plus() && !self.magnitude.is_zero() {
            "+"
        } else {
            ""
        }
    }

    pub fn to_ether_string(&self) -> Result<String, wallet_utils::Error> {
        let ether = unit::format_to_string(self.magnitude, ETHER_DECIMALS)?;
        Ok(if self.negative { format!("-{ether}") } else { ether })
    }
}

/// `{}` prints `-` for negative amounts, `{:+}` also prints `+` for positive ones.
impl fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = self.sign(f);
        write!(f, "{}{}", sign, self.magnitude)
    }
}

/// Native balance of one account around a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDelta {
    pub address: String,
    pub before: U256,
    pub after: U256,
}

impl BalanceDelta {
    pub fn new(address: &str, before: U256, after: U256) -> Self {
        Self {
            address: address.to_string(),
            before,
            after,
        }
    }

    /// `before - after`; negative when the balance went up.
    pub fn spent(&self) -> SignedAmount {
        SignedAmount::between(self.after, self.before)
    }
}

impl fmt::Display for BalanceDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spent = self.spent();
        match spent.to_ether_string() {
            Ok(ether) => write!(f, "{} spent {} wei ({} ether)", self.address, spent, ether),
            Err(_) => write!(f, "{} spent {} wei", self.address, spent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub holder: String,
    pub address: String,
    pub balance: U256,
}

/// Token balances of a set of holders at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBalances(pub Vec<TokenBalance>);

impl TokenBalances {
    pub fn push(&mut self, holder: &str, address: &str, balance: U256) {
        self.0.push(TokenBalance {
            holder: holder.to_string(),
            address: address.to_string(),
            balance,
        });
    }

    pub fn get(&self, holder: &str) -> Option<U256> {
        self.0.iter().find(|b| b.holder == holder).map(|b| b.balance)
    }

    /// Pairs every holder of `self` with its balance in `after`.
    pub fn deltas(&self, after: &TokenBalances) -> Vec<TokenDelta> {
        self.0
            .iter()
            .map(|before| TokenDelta {
                holder: before.holder.clone(),
                address: before.address.clone(),
                before: before.balance,
                after: after.get(&before.holder).unwrap_or(before.balance),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDelta {
    pub holder: String,
    pub address: String,
    pub before: U256,
    pub after: U256,
}

impl TokenDelta {
    /// `after - before`; negative when the holder lost tokens.
    pub fn received(&self) -> SignedAmount {
        SignedAmount::between(self.before, self.after)
    }
}

impl fmt::Display for TokenDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} -> {} ({:+})",
            self.holder,
            self.address,
            self.before,
            self.after,
            self.received()
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    pub made_transferable: bool,
    pub single_tx_id: u64,
    pub batch_tx_ids: Vec<u64>,
    pub single_submit: Option<BalanceDelta>,
    pub batch_submit: Option<BalanceDelta>,
    pub single_confirm: Vec<TokenDelta>,
    pub batch_confirm: Vec<TokenDelta>,
}
