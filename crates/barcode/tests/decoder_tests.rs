use base::Vec2;
use barcode::{DecodedSymbol, Decoder, QrDecoder};
use image::{Image, PixelFormat};

const SCALE: usize = 8;
const QUIET: usize = 4;

/// Render `payload` as a black-on-white QR code in a Bgr8 frame.
fn render_qr(payload: &str) -> Image {
    let code = qrencode::QrCode::new(payload.as_bytes()).unwrap();
    let modules = code.width();
    let side = (modules + 2 * QUIET) * SCALE;
    let mut image = Image::filled(Vec2::new(side, side), PixelFormat::Bgr8, [255, 255, 255]);

    for y in 0..side {
        for x in 0..side {
            let (mx, my) = (x / SCALE, y / SCALE);
            if mx < QUIET || my < QUIET || mx >= QUIET + modules || my >= QUIET + modules {
                continue;
            }
            if code[(mx - QUIET, my - QUIET)] == qrencode::Color::Dark {
                let idx = (y * side + x) * 3;
                image.data[idx..idx + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
    }

    image
}

#[test]
fn test_qr_decoder_reads_rendered_code() {
    let frame = render_qr("HELLO");
    let symbols = QrDecoder::new().decode(&frame);

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].payload, "HELLO");
    assert_eq!(symbols[0].boundary.len(), 4);
    for p in &symbols[0].boundary {
        assert!(p.x >= 0 && (p.x as usize) <= frame.size.x, "x {} out of frame", p.x);
        assert!(p.y >= 0 && (p.y as usize) <= frame.size.y, "y {} out of frame", p.y);
    }
}

#[test]
fn test_qr_decoder_blank_frame() {
    let frame = Image::filled(Vec2::new(64, 48), PixelFormat::Bgr8, [255, 255, 255]);
    assert!(QrDecoder::new().decode(&frame).is_empty());
}

#[test]
fn test_qr_decoder_unsupported_format() {
    let frame = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);
    assert!(QrDecoder::new().decode(&frame).is_empty());
}

#[test]
fn test_boxed_decoder() {
    struct Fixed;
    impl Decoder for Fixed {
        fn decode(&mut self, _frame: &Image) -> Vec<DecodedSymbol> {
            vec![DecodedSymbol::new("A", vec![Vec2::new(0, 0)])]
        }
    }

    let mut decoder: Box<dyn Decoder> = Box::new(Fixed);
    let frame = Image::filled(Vec2::new(1, 1), PixelFormat::Bgr8, [0, 0, 0]);
    assert_eq!(decoder.decode(&frame)[0].payload, "A");
}
