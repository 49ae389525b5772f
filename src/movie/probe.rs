//! AVI container probe: surface a movie's FourCC info before selection.
//!
//! Knowing which codec an AVI claims to need ("this movie wants DivX")
//! makes "couldn't load driver" logs actionable, so the movie selection
//! entry point logs the first stream header's type and handler before any
//! driver is attempted. The probe is observational only: unreadable or
//! non-AVI files are ignored and never affect selection.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A four-character code from a RIFF container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// The code's bytes as a string, with non-ASCII bytes replaced by `.`.
    pub fn as_str(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Type and handler of the first stream in an AVI file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AviStreamInfo {
    /// Stream type (`vids` for video, `auds` for audio).
    pub stream_type: FourCc,
    /// Codec handler the stream claims to need.
    pub handler: FourCc,
}

// An AVI file is RIFF chunks: fourcc + u32 size + data (padded to even).
// LIST chunks nest; the first `strh` chunk holds fccType and fccHandler.

/// Read the first stream header from an AVI byte stream.
///
/// Returns `Ok(None)` for anything that isn't a RIFF/AVI container or that
/// carries no stream header.
pub fn probe_avi(mut reader: impl Read) -> io::Result<Option<AviStreamInfo>> {
    let mut header = [0u8; 12];
    if reader.read_exact(&mut header).is_err() {
        return Ok(None);
    }
    if &header[0..4] != b"RIFF" || &header[8..12] != b"AVI " {
        return Ok(None);
    }
    let riff_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);
    // The RIFF size covers the "AVI " tag plus every chunk that follows.
    let body = riff_size.saturating_sub(4) as u64;
    scan_chunks(&mut reader.take(body), 0)
}

/// Lists nested deeper than this are skipped opaquely. A real AVI needs
/// two levels (`hdrl` > `strl`); the cap keeps a malformed file with
/// thousands of nested lists from blowing the stack.
const MAX_LIST_DEPTH: usize = 8;

/// Walk a run of RIFF chunks looking for the first `strh`.
fn scan_chunks(reader: &mut dyn Read, depth: usize) -> io::Result<Option<AviStreamInfo>> {
    loop {
        let mut head = [0u8; 8];
        if reader.read_exact(&mut head).is_err() {
            return Ok(None);
        }
        let id = [head[0], head[1], head[2], head[3]];
        let size = u32::from_le_bytes([head[4], head[5], head[6], head[7]]) as u64;

        if &id == b"LIST" && depth < MAX_LIST_DEPTH {
            // Descend: a list is a 4-byte type followed by nested chunks.
            let mut list_type = [0u8; 4];
            let mut body = (&mut *reader).take(size);
            if body.read_exact(&mut list_type).is_err() {
                return Ok(None);
            }
            if let Some(info) = scan_chunks(&mut body, depth + 1)? {
                return Ok(Some(info));
            }
            // Drain whatever of the list we didn't consume, plus the pad
            // byte an odd-sized list carries.
            io::copy(&mut body, &mut io::sink())?;
            if size & 1 == 1 {
                io::copy(&mut (&mut *reader).take(1), &mut io::sink())?;
            }
        } else if &id == b"strh" && size >= 8 {
            let mut strh = [0u8; 8];
            if reader.read_exact(&mut strh).is_err() {
                return Ok(None);
            }
            return Ok(Some(AviStreamInfo {
                stream_type: FourCc([strh[0], strh[1], strh[2], strh[3]]),
                handler: FourCc([strh[4], strh[5], strh[6], strh[7]]),
            }));
        } else {
            // Skip the chunk body, honoring RIFF's even-byte padding.
            let skip = size + (size & 1);
            io::copy(&mut (&mut *reader).take(skip), &mut io::sink())?;
        }
    }
}

/// Log an AVI file's stream type and handler, if it has them.
///
/// Failures (missing file, non-AVI content) are silently ignored.
pub fn log_avi_info(path: &Path) {
    let Ok(file) = File::open(path) else {
        return;
    };
    match probe_avi(io::BufReader::new(file)) {
        Ok(Some(info)) => {
            tracing::trace!(
                movie = %path.display(),
                handler = %info.handler,
                stream_type = %info.stream_type,
                "movie has handler '{}', type '{}'",
                info.handler,
                info.stream_type
            );
        }
        Ok(None) => {}
        Err(e) => {
            tracing::trace!(movie = %path.display(), error = %e, "AVI probe failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal AVI: RIFF(AVI ( LIST(hdrl( avih, LIST(strl( strh )) )) )).
    fn synthetic_avi(stream_type: &[u8; 4], handler: &[u8; 4]) -> Vec<u8> {
        let mut strh = Vec::new();
        strh.extend_from_slice(b"strh");
        strh.extend_from_slice(&56u32.to_le_bytes());
        strh.extend_from_slice(stream_type);
        strh.extend_from_slice(handler);
        strh.extend_from_slice(&[0u8; 48]);

        let mut strl = Vec::new();
        strl.extend_from_slice(b"LIST");
        strl.extend_from_slice(&(4 + strh.len() as u32).to_le_bytes());
        strl.extend_from_slice(b"strl");
        strl.extend_from_slice(&strh);

        let mut avih = Vec::new();
        avih.extend_from_slice(b"avih");
        avih.extend_from_slice(&56u32.to_le_bytes());
        avih.extend_from_slice(&[0u8; 56]);

        let mut hdrl = Vec::new();
        hdrl.extend_from_slice(b"LIST");
        hdrl.extend_from_slice(&(4 + avih.len() as u32 + strl.len() as u32).to_le_bytes());
        hdrl.extend_from_slice(b"hdrl");
        hdrl.extend_from_slice(&avih);
        hdrl.extend_from_slice(&strl);

        let mut avi = Vec::new();
        avi.extend_from_slice(b"RIFF");
        avi.extend_from_slice(&(4 + hdrl.len() as u32).to_le_bytes());
        avi.extend_from_slice(b"AVI ");
        avi.extend_from_slice(&hdrl);
        avi
    }

    #[test]
    fn test_probe_finds_first_stream_header() {
        let avi = synthetic_avi(b"vids", b"DIVX");
        let info = probe_avi(&avi[..]).unwrap().unwrap();
        assert_eq!(info.stream_type.as_str(), "vids");
        assert_eq!(info.handler.as_str(), "DIVX");
    }

    #[test]
    fn test_probe_audio_stream() {
        let avi = synthetic_avi(b"auds", b"\0\0\0\0");
        let info = probe_avi(&avi[..]).unwrap().unwrap();
        assert_eq!(info.stream_type.as_str(), "auds");
        assert_eq!(info.handler.as_str(), "....");
    }

    #[test]
    fn test_probe_rejects_non_riff() {
        assert_eq!(probe_avi(&b"not a movie at all"[..]).unwrap(), None);
    }

    #[test]
    fn test_probe_rejects_riff_that_is_not_avi() {
        let mut wav = Vec::new();
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&4u32.to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        assert_eq!(probe_avi(&wav[..]).unwrap(), None);
    }

    #[test]
    fn test_probe_survives_deeply_nested_lists() {
        // A malformed file that is nothing but LIST headers nested
        // thousands deep must come back empty, not blow the stack.
        let mut nested = Vec::new();
        for _ in 0..10_000 {
            let mut wrapped = Vec::new();
            wrapped.extend_from_slice(b"LIST");
            wrapped.extend_from_slice(&(4 + nested.len() as u32).to_le_bytes());
            wrapped.extend_from_slice(b"hdrl");
            wrapped.extend_from_slice(&nested);
            nested = wrapped;
        }

        let mut avi = Vec::new();
        avi.extend_from_slice(b"RIFF");
        avi.extend_from_slice(&(4 + nested.len() as u32).to_le_bytes());
        avi.extend_from_slice(b"AVI ");
        avi.extend_from_slice(&nested);

        assert_eq!(probe_avi(&avi[..]).unwrap(), None);
    }

    #[test]
    fn test_probe_skips_odd_sized_list_with_padding() {
        // An odd-sized LIST carries a pad byte; the stream header after
        // it must still be found at the right offset.
        let mut body = Vec::new();
        body.extend_from_slice(b"LIST");
        body.extend_from_slice(&5u32.to_le_bytes());
        body.extend_from_slice(b"odml");
        body.push(0x42);
        body.push(0); // pad byte

        body.extend_from_slice(b"strh");
        body.extend_from_slice(&56u32.to_le_bytes());
        body.extend_from_slice(b"vids");
        body.extend_from_slice(b"XVID");
        body.extend_from_slice(&[0u8; 48]);

        let mut avi = Vec::new();
        avi.extend_from_slice(b"RIFF");
        avi.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
        avi.extend_from_slice(b"AVI ");
        avi.extend_from_slice(&body);

        let info = probe_avi(&avi[..]).unwrap().unwrap();
        assert_eq!(info.stream_type.as_str(), "vids");
        assert_eq!(info.handler.as_str(), "XVID");
    }

    #[test]
    fn test_probe_handles_truncated_input() {
        let avi = synthetic_avi(b"vids", b"DIVX");
        // Cut the stream off inside the headers.
        assert_eq!(probe_avi(&avi[..40]).unwrap(), None);
    }

    #[test]
    fn test_probe_empty_input() {
        assert_eq!(probe_avi(&b""[..]).unwrap(), None);
    }

    #[test]
    fn test_log_avi_info_missing_file_is_silent() {
        log_avi_info(Path::new("/nonexistent/clip.avi"));
    }

    #[test]
    fn test_fourcc_display_masks_non_ascii() {
        let code = FourCc(*b"vi\xffs");
        assert_eq!(code.to_string(), "vi.s");
    }
}
