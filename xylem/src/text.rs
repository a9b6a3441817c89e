//! Typing text to the host.
//!
//! [`TextInjector`] queues short strings without waiting, [`HostTyper`] turns
//! queued strings into keyboard reports, one press and one release per character.

use core::fmt::{self, Write};

use heapless::String;

use crate::channel::{ReportChannel, TextChannel};
use crate::config::TEXT_BUFFER_SIZE;
use crate::hid::{KeyboardReport, Report};
use crate::types::keycode::HidKeyCode;

/// A bounded string queued for typing
pub type TextBuffer = String<TEXT_BUFFER_SIZE>;

/// Writes into a [`TextBuffer`], dropping everything past its capacity
struct TruncatingWriter<'a> {
    buf: &'a mut TextBuffer,
    truncated: bool,
}

impl Write for TruncatingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

/// Format into a bounded buffer, truncating at a char boundary when it is full
pub fn format_text(args: fmt::Arguments<'_>) -> TextBuffer {
    let mut buf = TextBuffer::new();
    let mut writer = TruncatingWriter {
        buf: &mut buf,
        truncated: false,
    };
    // The writer never fails, an error here can only come from a `Display` impl
    if writer.write_fmt(args).is_err() {
        error!("Formatting host text failed");
    }
    if writer.truncated {
        warn!("Host text truncated to {} bytes", TEXT_BUFFER_SIZE);
    }
    buf
}

/// Fire-and-forget handle for sending text to the host
#[derive(Clone, Copy)]
pub struct TextInjector<'a> {
    channel: &'a TextChannel,
}

impl<'a> TextInjector<'a> {
    pub fn new(channel: &'a TextChannel) -> Self {
        Self { channel }
    }

    pub fn send_string(&self, text: &str) {
        self.send(format_text(format_args!("{}", text)));
    }

    pub fn send_fmt(&self, args: fmt::Arguments<'_>) {
        self.send(format_text(args));
    }

    fn send(&self, text: TextBuffer) {
        if let Err(e) = self.channel.try_send(text) {
            warn!("Text channel is full, dropping text: {:?}", e);
        }
    }
}

/// Types queued texts as keyboard reports, US layout
pub struct HostTyper<'a> {
    texts: &'a TextChannel,
    reports: &'a ReportChannel,
}

impl<'a> HostTyper<'a> {
    pub fn new(texts: &'a TextChannel, reports: &'a ReportChannel) -> Self {
        Self { texts, reports }
    }

    pub async fn run(&mut self) -> ! {
        loop {
            self.type_next().await;
        }
    }

    /// Wait for the next queued text and type it
    pub async fn type_next(&mut self) {
        let text = self.texts.receive().await;
        debug!("Typing host text: {}", text.as_str());
        self.type_text(&text).await;
    }

    async fn type_text(&self, text: &str) {
        for c in text.chars() {
            let key = if c.is_ascii() { HidKeyCode::from_ascii(c as u8) } else { None };
            match key {
                Some((key, shifted)) => {
                    self.reports
                        .send(Report::KeyboardReport(KeyboardReport::single(key, shifted)))
                        .await;
                    self.reports
                        .send(Report::KeyboardReport(KeyboardReport::empty()))
                        .await;
                }
                None => warn!("No key types {:?}, skipped", c),
            }
        }
    }
}
