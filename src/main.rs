//! IR Link Relay Main Application
//!
//! Entry point for the RP2040-based console-to-infrared relay.
//! Brings up both UARTs, the carrier and the activity tick, then runs the
//! command loop.

#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m_rt::exception;
use critical_section::Mutex;
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{Config as UartConfig, Parity as UartParity, Uart};
use {defmt_rtt as _, panic_probe as _};

use ir_link_firmware::hal::gpio::StatusLed;
use ir_link_firmware::hal::uart::{next_byte, RpUart};
use ir_link_firmware::hal::{pwm, timer};
use ir_link_firmware::link::receiver::IrReceiver;
use ir_link_firmware::prelude::*;
use ir_link_firmware::protocol::command::{write_banner, Dispatcher};
use ir_link_firmware::protocol::line::LineReader;

/// Everything the IR receive interrupt touches besides the LED
struct IrContext {
    receiver: IrReceiver,
    link: Pl011<RpUart>,
    console: Pl011<RpUart>,
}

static IR_CONTEXT: Mutex<RefCell<Option<IrContext>>> = Mutex::new(RefCell::new(None));

static LED: Mutex<RefCell<Option<StatusLed<Output<'static>>>>> = Mutex::new(RefCell::new(None));

static ACTIVITY: ActivityTimer = ActivityTimer::new(ACTIVITY_HOLD_MS);

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("IR Link Relay v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // embassy sets up pin muxing and clocks; the handles must outlive the loop
    let mut console_config = UartConfig::default();
    console_config.baudrate = CONSOLE_BAUD;
    let _console_uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, console_config);

    let mut ir_config = UartConfig::default();
    ir_config.baudrate = DEFAULT_IR_BAUD.as_bps();
    ir_config.parity = UartParity::ParityEven;
    let _ir_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, ir_config);

    let mut console = Pl011::new(RpUart::console(), LineFormat::CONSOLE_8N1);
    match Divisor::from_clock(UART_CLOCK_HZ, CONSOLE_BAUD) {
        Some(divisor) => console.configure(divisor),
        None => error!("no divisor for console rate {}", CONSOLE_BAUD),
    }

    let mut ir_link = Pl011::new(RpUart::ir(), LineFormat::IR_8E1);
    match ir_link.init(DEFAULT_IR_BAUD, UART_CLOCK_HZ) {
        Some(timing) => info!("IR link up: {}", timing),
        None => error!("IR link init failed"),
    }

    let carrier = carrier_timing();
    let _carrier = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm::carrier_config(carrier));
    info!(
        "Carrier {} Hz ({})",
        carrier.actual_frequency(SYSTEM_CLOCK_HZ),
        carrier
    );

    critical_section::with(|cs| {
        LED.borrow_ref_mut(cs)
            .replace(StatusLed::new(Output::new(p.PIN_25, Level::Low)));

        // the interrupt side only touches DR, FR and ICR
        IR_CONTEXT.borrow_ref_mut(cs).replace(IrContext {
            receiver: IrReceiver::new(),
            link: Pl011::new(RpUart::ir(), LineFormat::IR_8E1),
            console: Pl011::new(RpUart::console(), LineFormat::CONSOLE_8N1),
        });
    });

    match cortex_m::Peripherals::take() {
        Some(mut core) => timer::start_tick(&mut core.SYST, SYSTICK_RELOAD),
        None => warn!("core peripherals already taken, activity LED will not time out"),
    }

    ir_link.enable_rx_interrupts();
    interrupt::UART1_IRQ.set_priority(Priority::from(irq::IR_RX_PRIORITY));
    // SAFETY: the handler only touches state behind IR_CONTEXT and LED,
    // both initialized above
    unsafe { interrupt::UART1_IRQ.enable() };

    write_banner(&mut console, DEFAULT_IR_BAUD);
    info!("Ready, entering command loop");

    let mut reader = LineReader::new();
    let mut dispatcher = Dispatcher::new(ir_link, UART_CLOCK_HZ);

    loop {
        let byte = next_byte(&mut console).await;
        if let Some(line) = reader.feed(byte) {
            // rejections are already reported on the console
            let _ = dispatcher.handle_line(&line, &mut console);
        }
    }
}

/// IR UART receive and receive-timeout interrupt
#[interrupt]
fn UART1_IRQ() {
    critical_section::with(|cs| {
        let mut context = IR_CONTEXT.borrow_ref_mut(cs);
        let mut led = LED.borrow_ref_mut(cs);

        if let (Some(context), Some(led)) = (context.as_mut(), led.as_mut()) {
            let IrContext {
                receiver,
                link,
                console,
            } = context;
            receiver.on_interrupt(link, console, &ACTIVITY, led);
        }
    });
}

/// 1 ms activity tick
#[exception]
fn SysTick() {
    critical_section::with(|cs| {
        if let Some(led) = LED.borrow_ref_mut(cs).as_mut() {
            ACTIVITY.tick(led);
        }
    });
}
