use super::Memory;

#[test]
fn program_is_zero_padded() {
    let memory = Memory::with_program(vec![1, 2, 3], 8).unwrap();

    assert_eq!(memory.len(), 8);
    assert_eq!(memory.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn oversized_program_is_rejected() {
    assert_eq!(Memory::with_program(vec![1; 33], 32), None);
    assert_eq!(Memory::with_program(vec![1; 32], 32).map(|m| m.len()), Some(32));
}

#[test]
fn out_of_range_access_is_rejected() {
    let mut memory = Memory::new(32);

    assert_eq!(memory.read(31), Some(0));
    assert_eq!(memory.read(32), None);
    assert_eq!(memory.write(32, 7), None);
    assert!(memory.iter().all(|word| *word == 0));
}

#[test]
fn write_then_read() {
    let mut memory = Memory::new(256);

    assert_eq!(memory.write(0xF3, 0xAB), Some(()));
    assert_eq!(memory.read(0xF3), Some(0xAB));
}

#[test]
fn slice_clamps_to_memory() {
    let memory = Memory::with_program(vec![9, 8, 7, 6], 4).unwrap();

    assert_eq!(memory.slice(2..10), [7, 6]);
    assert!(memory.slice(6..10).is_empty());
}
