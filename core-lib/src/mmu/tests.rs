use super::{Button, MMU};
use crate::interrupts::InterruptFlag;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn mmu_with_rom(bytes: &[(u16, u8)]) -> MMU {
    let mut rom = vec![0u8; 0x8000];
    for &(addr, value) in bytes {
        rom[addr as usize] = value;
    }
    match MMU::new(rom) {
        Ok(mmu) => mmu,
        Err(e) => panic!("MMU construction failed: {e}"),
    }
}

#[test]
fn rom_region_is_write_protected() {
    let mut mmu = mmu_with_rom(&[(0x1234, 0xAB)]);
    mmu.write(0x1234, 0xCD);
    mmu.write(0x0000, 0xCD);
    mmu.write(0x7FFF, 0xCD);
    assert_eq!(mmu.read(0x1234), 0xAB);
    assert_eq!(mmu.read(0x0000), 0x00);
    assert_eq!(mmu.read(0x7FFF), 0x00);
}

#[test_case(0x8000; "vram start")]
#[test_case(0x9FFF; "vram end")]
#[test_case(0xA000; "external ram")]
#[test_case(0xC000; "wram")]
#[test_case(0xFE00; "oam")]
#[test_case(0xFF80; "hram start")]
#[test_case(0xFFFE; "hram end")]
fn ram_regions_round_trip(addr: u16) {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(addr, 0x5A);
    assert_eq!(mmu.read(addr), 0x5A);
}

#[test]
fn echo_ram_mirrors_work_ram() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(0xC123, 0x77);
    assert_eq!(mmu.read(0xE123), 0x77);
    mmu.write(0xFDFF, 0x88);
    assert_eq!(mmu.read(0xDDFF), 0x88);
}

#[test]
fn unusable_region_reads_open_bus() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(0xFEA0, 0x12);
    assert_eq!(mmu.read(0xFEA0), 0xFF);
}

#[test]
fn div_write_resets_the_divider() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.step(512);
    assert_eq!(mmu.read(0xFF04), 2);
    mmu.write(0xFF04, 0xFF);
    assert_eq!(mmu.read(0xFF04), 0);
}

#[test]
fn oam_dma_copies_160_bytes() {
    let mut mmu = mmu_with_rom(&[]);
    for i in 0..0xA0u16 {
        mmu.write(0xC000 + i, i as u8);
    }
    mmu.write(0xFF46, 0xC0);
    for i in 0..0xA0u16 {
        assert_eq!(mmu.read(0xFE00 + i), i as u8, "OAM byte {i}");
    }
    // The DMA register reads back the last source page.
    assert_eq!(mmu.read(0xFF46), 0xC0);
}

#[test]
fn oam_dma_reads_from_rom_too() {
    let mut mmu = mmu_with_rom(&[(0x0200, 0x99)]);
    mmu.write(0xFF46, 0x02);
    assert_eq!(mmu.read(0xFE00), 0x99);
}

#[test]
fn joyp_reads_all_high_with_no_column_selected() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(0xFF00, 0x30);
    mmu.press(Button::A);
    mmu.press(Button::Down);
    assert_eq!(mmu.read(0xFF00), 0xFF);
}

#[test]
fn joyp_decodes_the_dpad_column() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.press(Button::Right);
    mmu.press(Button::Up);
    mmu.write(0xFF00, 0x20); // select d-pad (bit 4 low)
    assert_eq!(mmu.read(0xFF00), 0b1110_1010);
}

#[test]
fn joyp_decodes_the_button_column() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.press(Button::A);
    mmu.press(Button::Start);
    mmu.write(0xFF00, 0x10); // select buttons (bit 5 low)
    assert_eq!(mmu.read(0xFF00), 0b1101_0110);
}

#[test]
fn joyp_low_bits_are_read_only() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(0xFF00, 0x0F);
    assert_eq!(mmu.read(0xFF00) & 0x0F, 0x0F);
}

#[test]
fn press_edge_requests_joypad_interrupt() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.press(Button::Start);
    assert_eq!(
        mmu.interrupts.if_ & (1 << InterruptFlag::Joypad as u8),
        1 << InterruptFlag::Joypad as u8
    );

    // Holding the button down is not a new edge.
    mmu.interrupts.write_if(0);
    mmu.press(Button::Start);
    assert_eq!(mmu.interrupts.if_, 0);

    // Releasing and pressing again is.
    mmu.release(Button::Start);
    mmu.press(Button::Start);
    assert_eq!(
        mmu.interrupts.if_ & (1 << InterruptFlag::Joypad as u8),
        1 << InterruptFlag::Joypad as u8
    );
}

#[test]
fn interrupt_registers_read_with_upper_bits_high() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(0xFF0F, 0x01);
    mmu.write(0xFFFF, 0x05);
    assert_eq!(mmu.read(0xFF0F), 0xE1);
    assert_eq!(mmu.read(0xFFFF), 0xE5);
}

#[test]
fn unmodeled_io_registers_store_raw_bytes() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.write(0xFF01, 0x42); // serial data, unmodeled
    assert_eq!(mmu.read(0xFF01), 0x42);
}

#[test]
fn stepping_fans_out_to_timer_and_ppu() {
    let mut mmu = mmu_with_rom(&[]);
    mmu.step(456 * 10);
    assert_eq!(mmu.read(0xFF44), 10);
    assert_eq!(mmu.read(0xFF04), ((456 * 10) / 256) as u8 & 0xFF);
}
