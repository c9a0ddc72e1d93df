//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use parking_lot::Mutex;
use reviews_carousel::config::{ApiConfig, Config};
use reviews_carousel::reviews::{Review, ReviewsClient};
use reviews_carousel::ui::app::App;
use std::io;
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;

// -- Data ---------------------------------------------------------------------

pub fn review(id: i64, title: &str, rating: u8) -> Review {
    Review {
        id,
        title: title.to_string(),
        text: format!("Body of {}", title),
        rating,
    }
}

/// `n` reviews titled "Review 1" .. "Review n".
pub fn reviews(n: usize) -> Vec<Review> {
    (1..=n as i64)
        .map(|id| review(id, &format!("Review {}", id), 5))
        .collect()
}

// -- Client helpers -----------------------------------------------------------

pub fn client_for(base_url: &str) -> ReviewsClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        endpoint: "/api/reviews".to_string(),
    };
    ReviewsClient::new(&api).expect("Failed to build client")
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    let mut app = App::new(&Config::default());
    app.on_resize(100, 30);
    app
}

// -- Log capture --------------------------------------------------------------

/// Writer that records everything the fmt subscriber emits.
pub struct SpyWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for SpyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captures log output on the current thread while the guard is alive.
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl LogCapture {
    pub fn start() -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer_buffer = Arc::clone(&buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || SpyWriter(Arc::clone(&writer_buffer)))
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        Self {
            buffer,
            _guard: guard,
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}
