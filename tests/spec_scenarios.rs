//! The concrete end-to-end byte-exact scenarios, run through the public
//! `Emitter` API rather than the `#[cfg(test)]` checks next to the encoder
//! internals.

use ppc_asm::reg::{R1, R3};
use ppc_asm::Emitter;

#[test]
fn li_negative_one_then_blr() {
    let mut em = Emitter::new(8);
    em.li(R3, -1).blr();
    assert_eq!(
        em.as_slice(),
        &[0x38, 0x60, 0xFF, 0xFF, 0x4E, 0x80, 0x00, 0x20]
    );
}

#[test]
fn lis_then_ori() {
    let mut em = Emitter::new(8);
    em.lis(R3, 0x1234u16 as i16).ori(R3, R3, 0x5678);
    assert_eq!(
        em.as_slice(),
        &[0x3C, 0x60, 0x12, 0x34, 0x60, 0x63, 0x56, 0x78]
    );
}

#[test]
fn liw_full_32_bit_value() {
    let mut em = Emitter::new(8);
    em.liw(R1, 0x1234_5678);
    assert_eq!(
        em.as_slice(),
        &[0x3C, 0x20, 0x12, 0x34, 0x60, 0x21, 0x56, 0x78]
    );
}

#[test]
fn liw_low_half_set_high_half_zero() {
    let mut em = Emitter::new(8);
    em.liw(R1, 0x8000);
    assert_eq!(
        em.as_slice(),
        &[0x3C, 0x20, 0x00, 0x00, 0x60, 0x21, 0x80, 0x00]
    );
}

#[test]
fn liw_collapses_to_a_single_li() {
    let mut em = Emitter::new(4);
    em.liw(R1, 0xFFFF_F000);
    assert_eq!(em.as_slice(), &[0x38, 0x20, 0xF0, 0x00]);
}

#[test]
fn forward_conditional_branch_jumps_past_the_nop() {
    let mut em = Emitter::new(8);
    let label = em.bne();
    em.nop();
    em.set_label(label);
    assert_eq!(
        em.as_slice(),
        &[0x40, 0x82, 0x00, 0x08, 0x60, 0x00, 0x00, 0x00]
    );
}

#[test]
fn backward_branch_to_the_nop() {
    let mut em = Emitter::new(8);
    let anchor = em.current_address();
    em.nop();
    let label = em.bne();
    em.set_label_to(label, anchor);
    assert_eq!(
        em.as_slice(),
        &[0x60, 0x00, 0x00, 0x00, 0x40, 0x82, 0xFF, 0xFC]
    );
}

#[test]
fn standalone_single_word_mnemonics() {
    let mut em = Emitter::new(4);
    em.nop();
    assert_eq!(em.as_slice(), &[0x60, 0x00, 0x00, 0x00]);

    let mut em = Emitter::new(4);
    em.ud();
    assert_eq!(em.as_slice(), &[0x00, 0x00, 0x00, 0x00]);

    let mut em = Emitter::new(4);
    em.blr();
    assert_eq!(em.as_slice(), &[0x4E, 0x80, 0x00, 0x20]);

    let mut em = Emitter::new(4);
    em.sync();
    assert_eq!(em.as_slice(), &[0x7C, 0x00, 0x04, 0xAC]);
}
