use feistel_cipher::crypto::block_segmenter::{blocks_to_words, words_to_blocks};
use feistel_cipher::crypto::cipher_types::Block;

#[test]
fn test_even_words_pair_in_order() {
    let blocks = words_to_blocks(&[1, 2, 3, 4]);
    assert_eq!(blocks, vec![Block::new(1, 2), Block::new(3, 4)]);
}

#[test]
fn test_odd_words_get_one_zero_word() {
    let blocks = words_to_blocks(&[65]);
    assert_eq!(blocks, vec![Block::new(65, 0)]);

    let blocks = words_to_blocks(&[1, 2, 3]);
    assert_eq!(blocks, vec![Block::new(1, 2), Block::new(3, 0)]);
}

#[test]
fn test_empty_words() {
    assert!(words_to_blocks(&[]).is_empty());
    assert!(blocks_to_words(&[]).is_empty());
}

#[test]
fn test_input_words_are_not_consumed() {
    let words = vec![7, 8, 9];
    let first = words_to_blocks(&words);
    let second = words_to_blocks(&words);
    assert_eq!(first, second);
    assert_eq!(words, vec![7, 8, 9]);
}

#[test]
fn test_blocks_flatten_in_order() {
    let blocks = [Block::new(1, 2), Block::from([3, 4])];
    assert_eq!(blocks_to_words(&blocks), vec![1, 2, 3, 4]);
    assert_eq!(<[u64; 2]>::from(blocks[1]), [3, 4]);
}
