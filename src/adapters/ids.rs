//! UUID minting

use uuid::Uuid;

/// Source of fresh document ids
///
/// The assembler calls it once per module and once for a composition that
/// arrives without its own id.
pub trait IdMinter: Send + Sync {
    fn next_uuid(&self) -> Uuid;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdMinter;

impl IdMinter for RandomIdMinter {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl<T: IdMinter + ?Sized> IdMinter for &T {
    fn next_uuid(&self) -> Uuid {
        (**self).next_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_minter_yields_distinct_v4() {
        let minter = RandomIdMinter;
        let a = minter.next_uuid();
        let b = minter.next_uuid();

        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }
}
