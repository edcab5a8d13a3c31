//! Types Module Tests
//!
//! Tests for domain types (IrBaudRate, Divisor, LineFormat, CarrierTiming)
//! Run with: cargo test --test types_tests

use ir_link_firmware::types::{CarrierTiming, DataBits, Divisor, IrBaudRate, LineFormat, Parity, StopBits};

// =============================================================================
// IrBaudRate Tests
// =============================================================================

#[test]
fn test_baud_rate_whitelist() {
    assert_eq!(IrBaudRate::from_bps(300), Some(IrBaudRate::B300));
    assert_eq!(IrBaudRate::from_bps(1200), Some(IrBaudRate::B1200));
    assert_eq!(IrBaudRate::from_bps(2400), Some(IrBaudRate::B2400));
    assert_eq!(IrBaudRate::from_bps(4800), Some(IrBaudRate::B4800));

    assert!(IrBaudRate::from_bps(0).is_none());
    assert!(IrBaudRate::from_bps(600).is_none());
    assert!(IrBaudRate::from_bps(9600).is_none());
}

#[test]
fn test_baud_rate_from_value() {
    assert_eq!(IrBaudRate::from_value(2400), Some(IrBaudRate::B2400));
    assert!(IrBaudRate::from_value(-300).is_none());
    assert!(IrBaudRate::from_value(0).is_none());
}

#[test]
fn test_baud_rate_ordering() {
    let mut sorted = IrBaudRate::ALL;
    sorted.sort();
    assert_eq!(sorted, IrBaudRate::ALL);
    for rate in IrBaudRate::ALL {
        assert_eq!(IrBaudRate::from_bps(rate.as_bps()), Some(rate));
    }
}

#[test]
fn test_baud_rate_display() {
    assert_eq!(IrBaudRate::B4800.to_string(), "4800");
}

// =============================================================================
// Divisor Tests
// =============================================================================

#[test]
fn test_divisor_rounds_fraction() {
    // 40 MHz / (16 * 1200) = 2083.333; 0.333 * 64 = 21.33
    let d = Divisor::from_clock(40_000_000, 1200).unwrap();
    assert_eq!((d.integer(), d.fraction()), (2083, 21));

    // 125 MHz / (16 * 300) = 26041.667; 0.667 * 64 = 42.67, rounds up
    let d = Divisor::for_rate(125_000_000, IrBaudRate::B300).unwrap();
    assert_eq!((d.integer(), d.fraction()), (26041, 43));
}

#[test]
fn test_divisor_exact() {
    // 1.8432 MHz / (16 * 115200) = 1.0
    let d = Divisor::from_clock(1_843_200, 115_200).unwrap();
    assert_eq!((d.integer(), d.fraction()), (1, 0));
}

#[test]
fn test_divisor_rejects_zero_baud() {
    assert!(Divisor::from_clock(125_000_000, 0).is_none());
}

#[test]
fn test_divisor_rejects_out_of_range() {
    // integer part would be 0
    assert!(Divisor::from_clock(1_000, 4800).is_none());
    // integer part would exceed 16 bits
    assert!(Divisor::from_clock(125_000_000, 100).is_none());
}

#[test]
fn test_divisor_from_registers() {
    let d = Divisor::from_registers(3255, 13);
    assert_eq!(Some(d), Divisor::for_rate(125_000_000, IrBaudRate::B2400));
    assert_eq!(d.as_fixed().to_bits(), (3255 << 6) | 13);
    assert_eq!(format!("{d:?}"), "Divisor(3255 + 13/64)");
}

#[test]
fn test_divisor_actual_baud_close() {
    for rate in IrBaudRate::ALL {
        let d = Divisor::for_rate(125_000_000, rate).unwrap();
        assert!(d.actual_baud(125_000_000).abs_diff(rate.as_bps()) <= 1);
    }
}

// =============================================================================
// LineFormat Tests
// =============================================================================

#[test]
fn test_line_format_presets() {
    let ir = LineFormat::IR_8E1;
    assert_eq!(ir.data_bits, DataBits::Eight);
    assert_eq!(ir.parity, Parity::Even);
    assert_eq!(ir.stop_bits, StopBits::One);
    assert!(ir.fifo);

    assert_eq!(LineFormat::default(), LineFormat::CONSOLE_8N1);
}

#[test]
fn test_line_format_register_values() {
    assert_eq!(LineFormat::IR_8E1.lcr_h(), 0x76);
    assert_eq!(LineFormat::CONSOLE_8N1.lcr_h(), 0x70);

    let seven_odd_two = LineFormat {
        data_bits: DataBits::Seven,
        parity: Parity::Odd,
        stop_bits: StopBits::Two,
        fifo: false,
    };
    assert_eq!(seven_odd_two.lcr_h(), 0x4A);
}

// =============================================================================
// CarrierTiming Tests
// =============================================================================

#[test]
fn test_carrier_timing_38khz() {
    let t = CarrierTiming::for_frequency(125_000_000, 38_000);
    assert_eq!(t.top, 3288);
    assert_eq!(t.compare, 1644);
    assert_eq!(t.actual_frequency(125_000_000), 38_005);
}

#[test]
fn test_carrier_timing_clamped() {
    // too slow for a 16-bit counter
    let slow = CarrierTiming::for_frequency(125_000_000, 100);
    assert_eq!(slow.top, u16::MAX);

    let zero = CarrierTiming::for_frequency(125_000_000, 0);
    assert_eq!(zero.top, u16::MAX);
}
