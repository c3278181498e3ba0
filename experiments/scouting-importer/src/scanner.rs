use {
    barcode::{Decoder, Stroke, annotate},
    base::Vec2,
    image::Image,
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        thread::{self, JoinHandle},
    },
    tokio::sync::{mpsc, oneshot},
    video::{FrameSource, VideoError},
};

/// A value published from the capture thread to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Payload of the first symbol found in a frame.
    Text(String),
    /// The annotated frame, packed `Bgr8`.
    Image(Image),
}

/// Outcome of a single capture iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    /// The read failed; nothing was decoded or published.
    Dropped,
    /// The frame (and payload, if any) went out.
    Published,
    /// The receiving side is gone.
    Disconnected,
}

/// Read, decode, annotate and publish one frame.
pub fn scan_once<S: FrameSource + ?Sized, D: Decoder + ?Sized>(
    source: &mut S,
    decoder: &mut D,
    stroke: &Stroke,
    sender: &mpsc::UnboundedSender<Notification>,
) -> Iteration {
    let mut frame = match source.read() {
        Ok(frame) => frame,
        Err(error) => {
            log::debug!("scanner: frame dropped: {}", error);
            return Iteration::Dropped;
        }
    };

    let symbols = decoder.decode(&frame);
    if let Some(first) = symbols.first() {
        if sender.send(Notification::Text(first.payload.clone())).is_err() {
            return Iteration::Disconnected;
        }
    }

    if let Err(error) = annotate(&mut frame, &symbols, stroke) {
        log::warn!("scanner: cannot annotate frame: {}", error);
    }

    if sender.send(Notification::Image(frame)).is_err() {
        return Iteration::Disconnected;
    }
    Iteration::Published
}

/// Background capture loop.
///
/// Owns the source on its own thread from open to close. Frames go out
/// through the sender in the order they were captured.
pub struct Scanner {
    cancel: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
    size: Vec2<usize>,
}

impl Scanner {
    /// Spawn the capture thread and wait for the source to open.
    ///
    /// Returns the open error if the device cannot be opened; the thread is
    /// joined before returning in that case.
    pub fn start<S, D>(
        mut source: S,
        mut decoder: D,
        stroke: Stroke,
        sender: mpsc::UnboundedSender<Notification>,
    ) -> Result<Self, VideoError>
    where
        S: FrameSource + 'static,
        D: Decoder + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let (init_tx, init_rx) = oneshot::channel::<Result<Vec2<usize>, VideoError>>();

        let join_handle = thread::Builder::new().name("scanner".to_string()).spawn({
            let cancel = Arc::clone(&cancel);
            move || {
                match source.open() {
                    Ok(size) => {
                        let _ = init_tx.send(Ok(size));
                    }
                    Err(error) => {
                        let _ = init_tx.send(Err(error));
                        return;
                    }
                }

                log::info!("scanner: capture loop started");
                while !cancel.load(Ordering::Acquire) {
                    if scan_once(&mut source, &mut decoder, &stroke, &sender)
                        == Iteration::Disconnected
                    {
                        log::info!("scanner: display disconnected");
                        break;
                    }
                }

                source.close();
                log::info!("scanner: capture loop stopped");
            }
        })?;

        let size = match init_rx.blocking_recv() {
            Ok(Ok(size)) => size,
            Ok(Err(error)) => {
                let _ = join_handle.join();
                return Err(error);
            }
            Err(_) => {
                let _ = join_handle.join();
                return Err(VideoError::Device(
                    "scanner thread exited during open".to_string(),
                ));
            }
        };

        Ok(Self {
            cancel,
            join_handle: Some(join_handle),
            size,
        })
    }

    /// Frame size the device agreed to.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the loop and wait for the thread to release the device.
    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Release);
        if let Some(handle) = self.join_handle.take() {
            if handle.join().is_err() {
                log::error!("scanner: capture thread panicked");
            }
        }
    }
}

impl Drop for Scanner {
    fn drop(&mut self) {
        self.stop();
    }
}
