use nix::sys::signal::SigSet;
use std::io;
use std::sync::mpsc;
use std::thread;

use unsegen::input::Input;

use crate::calendar::CalendarDate;

pub enum Event {
    Input(Input),
    Resize,
    Pick(CalendarDate),
}

/// Funnels terminal input and window size changes into one queue that is
/// drained by the main loop, one event at a time.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
    _input_handle: thread::JoinHandle<()>,
    _signal_handle: thread::JoinHandle<()>,
}

impl Dispatcher {
    /// `signals` must already be blocked in the calling thread so that the
    /// spawned threads inherit the mask and only the waiter receives them.
    pub fn new(signals: SigSet) -> Dispatcher {
        let (tx, rx) = mpsc::channel();
        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for evt in Input::read_all(stdin) {
                    match evt {
                        Ok(input) => {
                            if tx.send(Event::Input(input)).is_err() {
                                return;
                            }
                        }
                        Err(e) => log::warn!("Error while reading input: {}", e),
                    }
                }
            })
        };
        let signal_handle = {
            let tx = tx.clone();
            thread::spawn(move || loop {
                match signals.wait() {
                    Ok(signal) => {
                        log::debug!("received {:?}", signal);
                        if tx.send(Event::Resize).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::warn!("Stopped waiting for signals: {}", e);
                        return;
                    }
                }
            })
        };
        Dispatcher {
            rx,
            tx,
            _input_handle: input_handle,
            _signal_handle: signal_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }

    pub fn event_sink(&self) -> &mpsc::Sender<Event> {
        &self.tx
    }
}
