use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Rgba8;
use crate::foundation::error::GlyphloomError;
use crate::text::face::TextExtent;
use crate::text::fonts::FontStyle;

struct DotFace {
    size: f32,
}

impl FontFace for DotFace {
    fn size(&self) -> f32 {
        self.size
    }
    fn ascent(&self) -> f32 {
        self.size * 0.8
    }
    fn descent(&self) -> f32 {
        self.size * 0.2
    }
    fn measure(&mut self, text: &str) -> TextExtent {
        TextExtent {
            width: text.chars().count() as i32 * self.advance('x'),
            height: self.line_height(),
        }
    }
    fn advance(&mut self, _ch: char) -> i32 {
        (self.size * 0.5) as i32
    }
    fn draw(&mut self, target: &mut PixelBuffer, _: &str, x: i32, baseline: i32, color: Rgba8) {
        target.put(x, baseline - 1, color);
    }
}

struct DotProvider;

impl FaceProvider for DotProvider {
    type Face = DotFace;

    fn load_face(&self, _: FontStyle, size: f32) -> GlyphloomResult<DotFace> {
        Ok(DotFace { size })
    }
}

fn small_config() -> RenderConfig {
    RenderConfig {
        width: 64,
        height: 32,
        font_size: 12.0,
        ..Default::default()
    }
}

#[test]
fn static_effect_follows_reveal_flag() {
    let mut cfg = small_config();
    assert_eq!(static_effect(&cfg), RenderEffect::Outlined);
    cfg.reveal = true;
    assert_eq!(static_effect(&cfg), RenderEffect::Reveal);
}

#[test]
fn generate_dispatches_on_animate() {
    let palette = Palette::studio();
    let mut cfg = small_config();
    let still = generate("Hi", &cfg, &DotProvider, &palette).unwrap();
    assert!(!still.is_animated());
    assert_eq!(still.extension(), "png");
    assert_eq!(still.frames().len(), 1);

    cfg.animate = true;
    let anim = generate("Hi", &cfg, &DotProvider, &palette).unwrap();
    assert!(anim.is_animated());
    assert_eq!(anim.extension(), "gif");
    assert_eq!(anim.frames().len(), ANIMATION_EFFECTS.len() * ANIMATION_CYCLES);
}

#[test]
fn invalid_config_is_rejected_before_layout() {
    let cfg = RenderConfig {
        height: 0,
        ..small_config()
    };
    let err = generate_static("Hi", &cfg, &DotProvider, &Palette::studio()).unwrap_err();
    assert!(matches!(err, GlyphloomError::Validation(_)), "{err}");
}

#[test]
fn render_to_sink_streams_every_frame() {
    let cfg = RenderConfig {
        animate: true,
        ..small_config()
    };
    let mut sink = InMemorySink::new();
    let generated =
        render_to_sink("Hi there", &cfg, &DotProvider, &Palette::studio(), &mut sink).unwrap();

    let sink_cfg = sink.config().unwrap();
    assert_eq!(sink_cfg.frame_count, 8);
    assert_eq!(sink_cfg.frame_delay_cs, GIF_FRAME_DELAY_CS);
    assert_eq!((sink_cfg.width, sink_cfg.height), (64, 32));
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(*idx, i);
        assert_eq!(frame, &generated.frames()[i]);
    }
}
