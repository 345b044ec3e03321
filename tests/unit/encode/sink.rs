use super::*;
use crate::foundation::core::Rgba8;

fn cfg(frame_count: usize) -> SinkConfig {
    SinkConfig {
        width: 4,
        height: 3,
        frame_count,
        frame_delay_cs: 15,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glyphloom_sink_{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2)).unwrap();
    sink.push_frame(0, &PixelBuffer::new(4, 3)).unwrap();
    sink.push_frame(1, &PixelBuffer::filled(4, 3, Rgba8::WHITE)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(&cfg(2)));
    let idx: Vec<usize> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn sinks_reject_mismatched_frames_and_missing_begin() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(0, &PixelBuffer::new(4, 3)).is_err());
    sink.begin(cfg(1)).unwrap();
    let err = sink.push_frame(0, &PixelBuffer::new(5, 3)).unwrap_err();
    assert!(err.to_string().contains("sink expects 4x3"), "{err}");
}

#[test]
fn png_sink_writes_one_frame() {
    let dir = scratch_dir("png");
    let path = dir.join("one.png");
    let mut sink = PngSink::new(&path);
    assert!(sink.begin(cfg(2)).is_err());

    sink.begin(cfg(1)).unwrap();
    sink.push_frame(0, &PixelBuffer::filled(4, 3, Rgba8::opaque(9, 8, 7)))
        .unwrap();
    assert!(sink.push_frame(1, &PixelBuffer::new(4, 3)).is_err());
    sink.end().unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(2, 1).0, [9, 8, 7, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sink_end_without_frame_fails() {
    let mut sink = PngSink::new(scratch_dir("png_empty").join("never.png"));
    sink.begin(cfg(1)).unwrap();
    assert!(matches!(sink.end(), Err(GlyphloomError::Encode(_))));
}

#[test]
fn gif_sink_writes_on_end() {
    let dir = scratch_dir("gif");
    let path = dir.join("anim.gif");
    let mut sink = GifSink::new(&path, Palette::studio());
    sink.begin(cfg(3)).unwrap();
    for i in 0..3 {
        sink.push_frame(i, &PixelBuffer::filled(4, 3, Rgba8::BLACK)).unwrap();
    }
    assert!(!path.exists());
    sink.end().unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let _ = std::fs::remove_dir_all(&dir);
}
