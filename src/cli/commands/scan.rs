use crate::capture::{
    CaptureAdapter, CaptureError, Feedback, LineScanner, Silent, TerminalBell, choose_default_device,
};
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RecordStore, SelectionFlow, Slot};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Item};
use crate::ui::messages::{info, notice, warning};
use crate::ui::render::records_table;
use crate::utils::date;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Options of one `scan` invocation.
pub struct ScanOptions<'a> {
    pub code: Option<&'a str>,
    pub device: Option<&'a str>,
    pub file: Option<&'a str>,
    pub item: Option<Item>,
    pub continuous: bool,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        code,
        device,
        file,
        item,
        continuous,
    } = cmd
    {
        let opts = ScanOptions {
            code: code.as_deref(),
            device: device.as_deref(),
            file: file.as_deref(),
            item: *item,
            continuous: *continuous,
        };

        let mut store = open_store(cfg)?;
        let scanner = LineScanner::new(io::stdin().lock());
        run(&opts, cfg, &mut store, scanner)?;
    }

    Ok(())
}

/// Drive the selection flow from one of the three sources: a code given on
/// the command line, a saved scan, or the keyboard scanner.
pub fn run<S: Slot, R: BufRead>(
    opts: &ScanOptions,
    cfg: &Config,
    store: &mut RecordStore<S>,
    mut scanner: LineScanner<R>,
) -> AppResult<()> {
    let feedback: Box<dyn Feedback> = if cfg.beep {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    };
    let mut flow = SelectionFlow::new(feedback, cfg.flow_timings());

    if let Some(code) = opts.code {
        return scan_once(code, opts.item, &mut flow, store, &mut scanner);
    }

    if let Some(file) = opts.file {
        let code = scanner.scan_static_image(Path::new(file))?;
        return scan_once(&code, opts.item, &mut flow, store, &mut scanner);
    }

    let device_id = resolve_device(&scanner, opts.device, &cfg.preferred_camera)?;

    if !opts.continuous {
        scanner.start_session(&device_id)?;
        info("Ready to scan…");
        return match scanner.next_decoded()? {
            Some(code) => scan_once(&code, opts.item, &mut flow, store, &mut scanner),
            None => {
                scanner.stop_session()?;
                info("No code scanned.");
                Ok(())
            }
        };
    }

    let reset = Duration::from_secs(cfg.saved_reset_secs);
    let mut saved = 0usize;
    info("Continuous scanning, end the input (Ctrl-D) to stop.");

    loop {
        flow.tick(date::now());
        if !scanner.is_scanning() {
            scanner.start_session(&device_id)?;
        }

        let code = match scanner.next_decoded() {
            Ok(Some(code)) => code,
            Ok(None) => break,
            Err(e) => {
                flow.report_error(e.to_string(), date::now());
                show_notice(&flow);
                return Err(e.into());
            }
        };

        match flow.on_decoded(&code, store, &mut scanner, date::now()) {
            Ok(()) => {}
            Err(AppError::AlreadyMarkedToday(_)) => {
                show_notice(&flow);
                continue;
            }
            Err(e) => return Err(e),
        }
        show_notice(&flow);

        match pick_item(opts.item, &mut scanner)? {
            Some(item) => {
                let rec = flow.choose(item, store, date::now())?;
                show_saved(&flow, &rec);
                saved += 1;

                thread::sleep(reset);
                flow.tick(date::now());
            }
            None => break,
        }
    }

    scanner.stop_session()?;
    info(format!("Scanning stopped, {saved} attendance(s) saved."));
    Ok(())
}

fn scan_once<S: Slot, R: BufRead>(
    code: &str,
    item: Option<Item>,
    flow: &mut SelectionFlow,
    store: &mut RecordStore<S>,
    scanner: &mut LineScanner<R>,
) -> AppResult<()> {
    flow.on_decoded(code, store, &mut *scanner, date::now())?;
    show_notice(flow);

    match pick_item(item, scanner)? {
        Some(item) => {
            let rec = flow.choose(item, store, date::now())?;
            show_saved(flow, &rec);
        }
        None => warning("No item selected, attendance not saved."),
    }

    Ok(())
}

fn resolve_device<R: BufRead>(
    scanner: &LineScanner<R>,
    requested: Option<&str>,
    preferred: &str,
) -> AppResult<String> {
    if let Some(id) = requested {
        return Ok(id.to_string());
    }

    let devices = scanner.list_devices()?;
    let chosen = choose_default_device(&devices, preferred).ok_or(CaptureError::NoDevice)?;
    tracing::debug!(device = %chosen.id, label = %chosen.display_label(), "default device selected");
    Ok(chosen.id.clone())
}

/// `--item` if given, otherwise ask on the scanner's keyboard until a valid
/// answer or the end of input.
fn pick_item<R: BufRead>(preset: Option<Item>, scanner: &mut LineScanner<R>) -> AppResult<Option<Item>> {
    if preset.is_some() {
        return Ok(preset);
    }

    loop {
        print!(
            "Select item: [1] {} {}  [2] {} {} > ",
            Item::Egg.icon(),
            Item::Egg.label(),
            Item::Banana.icon(),
            Item::Banana.label()
        );
        let _ = io::stdout().flush();

        let Some(reply) = scanner.read_reply()? else {
            println!();
            return Ok(None);
        };

        match Item::from_input(&reply) {
            Some(item) => return Ok(Some(item)),
            None => warning(AppError::InvalidItem(reply)),
        }
    }
}

fn show_notice(flow: &SelectionFlow) {
    if let Some(n) = flow.notice() {
        notice(n);
    }
}

fn show_saved(flow: &SelectionFlow, rec: &AttendanceRecord) {
    show_notice(flow);
    println!("{}", records_table(&[rec]));
}
