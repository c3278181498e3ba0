use {
    crate::DecodedSymbol,
    base::Vec2,
    image::{Image, to_luma},
};

/// Finds symbols in a frame. Zero symbols is a normal answer.
pub trait Decoder: Send {
    fn decode(&mut self, frame: &Image) -> Vec<DecodedSymbol>;
}

impl<T: Decoder + ?Sized> Decoder for Box<T> {
    fn decode(&mut self, frame: &Image) -> Vec<DecodedSymbol> {
        (**self).decode(frame)
    }
}

/// QR code decoder backed by `rqrr`.
///
/// Each symbol's boundary is the four grid corners `rqrr` reports. Grids that
/// are located but fail to decode are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrDecoder;

impl QrDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for QrDecoder {
    fn decode(&mut self, frame: &Image) -> Vec<DecodedSymbol> {
        let luma = match to_luma(frame) {
            Ok(luma) => luma,
            Err(error) => {
                log::warn!("qr: cannot scan frame: {}", error);
                return Vec::new();
            }
        };

        let width = frame.size.x;
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width, frame.size.y, |x, y| {
                luma[y * width + x]
            });

        prepared
            .detect_grids()
            .into_iter()
            .filter_map(|grid| match grid.decode() {
                Ok((_meta, payload)) => {
                    let boundary = grid.bounds.iter().map(|p| Vec2::new(p.x, p.y)).collect();
                    Some(DecodedSymbol::new(payload, boundary))
                }
                Err(error) => {
                    log::debug!("qr: grid located but not decoded: {:?}", error);
                    None
                }
            })
            .collect()
    }
}
