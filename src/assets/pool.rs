use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread::JoinHandle,
};

use anyhow::Context;

use crate::{
    assets::{
        decode::{DecodedFrame, decode_frame},
        source::{AssetRoot, frame_file_name},
    },
    foundation::{
        core::{FrameCount, FrameIndex},
        error::{MuxuError, MuxuResult},
    },
    player::prefetch::{FrameLoad, FrameLoader},
};

/// Read and decode one frame of the sequence rooted at `root`.
pub fn load_frame(
    root: &AssetRoot,
    count: FrameCount,
    index: FrameIndex,
) -> MuxuResult<DecodedFrame> {
    let name = frame_file_name(count, index);
    let bytes = root.read(&name)?;
    decode_frame(&bytes)
        .map_err(|e| MuxuError::asset(format!("{}: {e}", root.locate(&name))))
}

/// Fixed set of worker threads decoding frames off the player's thread.
///
/// Requests go out over one shared queue; finished frames come back over a second channel
/// that [`FrameLoader::poll_completed`] drains without blocking. Shutdown waits for at most
/// the frames already being decoded; queued requests are dropped.
pub struct DecodePool {
    req_tx: Option<mpsc::Sender<FrameIndex>>,
    stop: Arc<AtomicBool>,
    result_rx: mpsc::Receiver<FrameLoad<DecodedFrame>>,
    workers: Vec<JoinHandle<()>>,
}

impl DecodePool {
    pub fn spawn(root: AssetRoot, count: FrameCount, threads: usize) -> MuxuResult<Self> {
        if threads == 0 {
            return Err(MuxuError::validation("decode pool needs at least one thread"));
        }
        let (req_tx, req_rx) = mpsc::channel::<FrameIndex>();
        let (result_tx, result_rx) = mpsc::channel();
        let req_rx = Arc::new(Mutex::new(req_rx));
        let root = Arc::new(root);
        let stop = Arc::new(AtomicBool::new(false));

        let mut workers = Vec::with_capacity(threads);
        for n in 0..threads {
            let req_rx = Arc::clone(&req_rx);
            let result_tx = result_tx.clone();
            let root = Arc::clone(&root);
            let stop = Arc::clone(&stop);
            let handle = std::thread::Builder::new()
                .name(format!("muxu-decode-{n}"))
                .spawn(move || {
                    loop {
                        let index = {
                            let Ok(rx) = req_rx.lock() else {
                                return;
                            };
                            match rx.recv() {
                                Ok(index) => index,
                                Err(_) => return,
                            }
                        };
                        if stop.load(Ordering::Acquire) {
                            return;
                        }
                        let result = load_frame(&root, count, index);
                        if result_tx.send(FrameLoad { index, result }).is_err() {
                            return;
                        }
                    }
                })
                .with_context(|| format!("spawn decode worker {n}"))?;
            workers.push(handle);
        }
        tracing::debug!(%root, threads, frames = count.get(), "decode pool started");

        Ok(Self {
            req_tx: Some(req_tx),
            stop,
            result_rx,
            workers,
        })
    }

    pub fn threads(&self) -> usize {
        self.workers.len()
    }
}

impl FrameLoader for DecodePool {
    type Frame = DecodedFrame;

    fn request(&mut self, index: FrameIndex) {
        let Some(tx) = &self.req_tx else {
            return;
        };
        if tx.send(index).is_err() {
            tracing::debug!(index = index.0, "decode pool gone; request dropped");
        }
    }

    fn poll_completed(&mut self) -> Vec<FrameLoad<DecodedFrame>> {
        self.result_rx.try_iter().collect()
    }

    fn shutdown(&mut self) {
        if self.req_tx.is_none() {
            return;
        }
        self.stop.store(true, Ordering::Release);
        // Disconnecting wakes idle workers; busy ones see the flag after their current frame.
        self.req_tx = None;
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                tracing::warn!("decode worker panicked");
            }
        }
        // Discard whatever finished after the last poll.
        while self.result_rx.try_recv().is_ok() {}
    }
}

impl Drop for DecodePool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
