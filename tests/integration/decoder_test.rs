//! Integration tests for the SGR decoder through the public API.

use mousecap::{MouseEvent, MouseEventKind, SgrDecoder};

fn decode_str(decoder: &mut SgrDecoder, bytes: &[u8]) -> Vec<String> {
    decoder.feed(bytes).map(|e| e.to_string()).collect()
}

// ============================================================================
// Realistic streams
// ============================================================================

#[test]
fn click_drag_release_session() {
    let mut decoder = SgrDecoder::new();
    let stream = b"\x1b[<0;10;5M\x1b[<32;11;5M\x1b[<32;12;5M\x1b[<0;12;5m";
    assert_eq!(
        decode_str(&mut decoder, stream),
        vec![
            "press:btn=0:x=10:y=5",
            "drag:btn=0:x=11:y=5",
            "drag:btn=0:x=12:y=5",
            "release:btn=0:x=12:y=5",
        ]
    );
}

#[test]
fn chunked_stream_with_noise_snapshot() {
    let mut decoder = SgrDecoder::new();
    let chunks: [&[u8]; 3] = [
        b"garbage\x1b[<0;10;5M\x1b[<32;12",
        b";5M\x1b[<64;1;1M",
        b"\x1b[<0;10;5m",
    ];

    let mut lines = Vec::new();
    for chunk in chunks {
        lines.extend(decoder.feed(chunk).map(|e| e.to_string()));
    }

    insta::assert_snapshot!(lines.join("\n"), @r"
    press:btn=0:x=10:y=5
    drag:btn=0:x=12:y=5
    scroll_up:btn=64:x=1:y=1
    release:btn=0:x=10:y=5
    ");
}

#[test]
fn wheel_burst_decodes_every_tick() {
    let mut decoder = SgrDecoder::new();
    let stream = b"\x1b[<64;40;12M".repeat(5);
    let events: Vec<MouseEvent> = decoder.feed(&stream).collect();

    assert_eq!(events.len(), 5);
    assert!(events
        .iter()
        .all(|e| e.kind == MouseEventKind::ScrollUp && e.button == 64));
}

// ============================================================================
// Robustness
// ============================================================================

#[test]
fn mixed_junk_and_sequences_yield_only_valid_events() {
    let mut decoder = SgrDecoder::new();
    let stream = b"\x1b[2J\x1b[<0;1;1M\xffbinary\x00\x1b[<notanum;2;2M\x1b[<65;3;3M";
    assert_eq!(
        decode_str(&mut decoder, stream),
        vec!["press:btn=0:x=1:y=1", "scroll_down:btn=65:x=3:y=3"]
    );
}

#[test]
fn same_events_regardless_of_chunking() {
    let stream = b"x\x1b[<0;1;1M\x1b[<32;2;2M\x1b[<0;2;2my".to_vec();

    let mut whole = SgrDecoder::new();
    let expected: Vec<String> = whole.feed(&stream).map(|e| e.to_string()).collect();
    assert_eq!(expected.len(), 3);

    for chunk_size in 1..stream.len() {
        let mut decoder = SgrDecoder::new();
        let mut events = Vec::new();
        for chunk in stream.chunks(chunk_size) {
            events.extend(decoder.feed(chunk).map(|e| e.to_string()));
        }
        assert_eq!(events, expected, "chunk size {}", chunk_size);
    }
}
