/// Face value printed on a card.
pub type Number = u8;

/// Count type used for pool sizes, flip counts, and budgets.
pub type CardCount = u16;

pub const fn to_count(len: usize) -> CardCount {
    if len > CardCount::MAX as usize {
        CardCount::MAX
    } else {
        len as CardCount
    }
}
