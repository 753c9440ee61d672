//! Front panel wired to a PDP-11.

use dec_pdp11::flags::{BIT1, IF};
use dec_pdp11::{CpuModel, CpuPdp11, Panel};
use emu_core::{Cpu, Error, Observable, Size};
use serde::Deserialize;

#[derive(Deserialize)]
struct Layout {
    bindings: Vec<String>,
}

const LAYOUT: &str = r#"{ "bindings": ["ps", "flags.z", "flags.c", "pc", "halted"] }"#;

fn wired(cpu: &CpuPdp11) -> Panel {
    let layout: Layout = serde_json::from_str(LAYOUT).expect("layout parses");
    let mut panel = Panel::new();
    for binding in &layout.bindings {
        panel.bind(binding, cpu).expect("CPU path");
    }
    panel.power_up(false);
    panel
}

fn lamp<'a>(status: &'a [(String, String)], binding: &str) -> Option<&'a str> {
    status.iter().find(|(b, _)| b == binding).map(|(_, text)| text.as_str())
}

#[test]
fn panel_tracks_lazy_flags() {
    let mut cpu = CpuPdp11::new(CpuModel::Pdp1170);
    let panel = wired(&cpu);

    let status = panel.update_status(&cpu);
    assert_eq!(status.len(), 5);
    assert_eq!(lamp(&status, "ps"), Some("0x0002"));
    assert_eq!(lamp(&status, "flags.z"), Some("0"));

    cpu.result_mut().set_arith(0x42, 0x42, 0, Size::Byte);
    let status = panel.update_status(&cpu);
    assert_eq!(lamp(&status, "flags.z"), Some("1"));
    assert_eq!(lamp(&status, "flags.c"), Some("0"));

    cpu.result_mut().set_arith(0x00, 0x01, 0u32.wrapping_sub(1), Size::Byte);
    let status = panel.update_status(&cpu);
    assert_eq!(lamp(&status, "flags.z"), Some("0"));
    assert_eq!(lamp(&status, "flags.c"), Some("1"));
}

#[test]
fn panel_reads_never_disturb_the_cpu() {
    let mut cpu = CpuPdp11::new(CpuModel::Pdp1145);
    cpu.set_status_word(IF | BIT1);
    cpu.interrupt(2).expect("level 2");
    let panel = wired(&cpu);

    let before = cpu.snapshot();
    for _ in 0..3 {
        let _ = panel.update_status(&cpu);
    }
    assert_eq!(cpu.snapshot(), before);
    assert_eq!(lamp(&panel.update_status(&cpu), "ps"), Some("0x0202"));
}

#[test]
fn unknown_control_is_rejected() {
    let cpu = CpuPdp11::new(CpuModel::Pdp1170);
    let mut panel = Panel::new();
    assert!(matches!(panel.bind("reset", &cpu), Err(Error::UnknownBinding(_))));
    assert!(panel.bind("r5", &cpu).is_ok());
    assert_eq!(panel.bindings().len(), 1);
}
