/// Bits per text character. The codec maps every character to one 8-bit symbol.
pub const ALPHABET_SIZE: usize = 8;

/// One Feistel half-block. Only the low `word_size` bits are ever set.
pub type Word = u64;

/// Round keys produced by a key schedule, one or more per round.
pub type RoundKeys = Vec<Word>;

/// Two-branch Feistel block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub left: Word,
    pub right: Word,
}

impl Block {
    pub fn new(left: Word, right: Word) -> Self {
        Self { left, right }
    }

    pub fn words(&self) -> [Word; 2] {
        [self.left, self.right]
    }
}

impl From<[Word; 2]> for Block {
    fn from([left, right]: [Word; 2]) -> Self {
        Self { left, right }
    }
}

impl From<Block> for [Word; 2] {
    fn from(block: Block) -> Self {
        block.words()
    }
}
