use crate::store::ShootDayId;

use std::fmt;

const GLOBAL_PREFIX: &str = "global";
const USER_PREFIX: &str = "user";
const DAY_PREFIX: &str = "day";

/// Namespace a stored field belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreScope {
    /// Single-day mode: one set of fields for the whole device.
    Global,
    /// Per-user bookkeeping such as the active shoot day.
    User {
        /// Opaque user id.
        user: String,
    },
    /// One shoot day of one user.
    Day {
        /// Opaque user id.
        user: String,
        /// Shoot day the field belongs to.
        day: ShootDayId,
    },
}

impl StoreScope {
    /// Rendered prefix shared by every key in this scope, trailing `/` included.
    pub fn prefix(&self) -> String {
        match self {
            StoreScope::Global => format!("{GLOBAL_PREFIX}/"),
            StoreScope::User { user } => format!("{USER_PREFIX}/{user}/"),
            StoreScope::Day { user, day } => format!("{DAY_PREFIX}/{user}/{day}/"),
        }
    }

    /// Prefix shared by every day-scoped key of `user`.
    pub fn days_prefix(user: &str) -> String {
        format!("{DAY_PREFIX}/{user}/")
    }
}

/// Composite key of a stored string value.
///
/// Rendered as `global/<field>`, `user/<user>/<field>` or
/// `day/<user>/<day>/<field>`. User and day ids never contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey {
    /// Namespace.
    pub scope: StoreScope,
    /// Field name within the namespace.
    pub field: String,
}

impl StoreKey {
    /// Key in `scope`.
    pub fn new(scope: StoreScope, field: impl Into<String>) -> Self {
        Self {
            scope,
            field: field.into(),
        }
    }

    /// Global key.
    pub fn global(field: impl Into<String>) -> Self {
        Self::new(StoreScope::Global, field)
    }

    /// Parse the rendered form back into a key.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(4, '/');
        match parts.next()? {
            GLOBAL_PREFIX => {
                let field = raw.strip_prefix(GLOBAL_PREFIX)?.strip_prefix('/')?;
                Some(Self::global(field))
            }
            USER_PREFIX => {
                let user = parts.next()?.to_string();
                let field = raw.splitn(3, '/').nth(2)?;
                Some(Self::new(StoreScope::User { user }, field))
            }
            DAY_PREFIX => {
                let user = parts.next()?.to_string();
                let day = ShootDayId::parse(parts.next()?).ok()?;
                let field = parts.next()?;
                Some(Self::new(StoreScope::Day { user, day }, field))
            }
            _ => None,
        }
    }

    /// The shoot day this key belongs to, for day-scoped keys.
    pub fn day(&self) -> Option<&ShootDayId> {
        match &self.scope {
            StoreScope::Day { day, .. } => Some(day),
            _ => None,
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.scope.prefix(), self.field)
    }
}
