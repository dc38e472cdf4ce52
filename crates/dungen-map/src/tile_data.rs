//! Packed tile data as stored in map files.
//!
//! Column-major tile bytes are run-length encoded, gzip compressed and
//! base64 encoded. A run is written as its value byte; runs longer than one
//! cell are followed by [`RUN_MARKER`] and a length byte.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use dungen_types::TileGrid;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::MapError;

pub const RUN_MARKER: u8 = 0xFF;
const MAX_RUN: usize = u8::MAX as usize;

pub fn rle_encode(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let value = bytes[i];
        let run = bytes[i..]
            .iter()
            .take(MAX_RUN)
            .take_while(|&&b| b == value)
            .count();
        out.push(value);
        if run > 1 {
            out.push(RUN_MARKER);
            out.push(run as u8);
        }
        i += run;
    }
    out
}

/// Expands runs until `cells` bytes are produced; trailing input is ignored.
pub fn rle_decode(data: &[u8], cells: usize) -> Result<Vec<u8>, MapError> {
    let mut out = Vec::with_capacity(cells.min(data.len().saturating_mul(MAX_RUN)));
    let mut i = 0;
    while i < data.len() && out.len() < cells {
        let value = data[i];
        i += 1;
        let mut count = 1;
        if data.get(i) == Some(&RUN_MARKER) {
            count = *data
                .get(i + 1)
                .ok_or(MapError::TruncatedRun { offset: i })? as usize;
            i += 2;
        }
        let count = count.min(cells - out.len());
        out.extend(std::iter::repeat_n(value, count));
    }
    if out.len() < cells {
        return Err(MapError::ShortTileData {
            expected: cells,
            actual: out.len(),
        });
    }
    Ok(out)
}

pub fn encode(grid: &TileGrid) -> Result<String, MapError> {
    let rle = rle_encode(&grid.to_bytes());
    let mut gz = GzEncoder::new(Vec::new(), Compression::default());
    gz.write_all(&rle)?;
    let compressed = gz.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Unpacks `tile_data` for a `width`×`depth` grid. Oversized headers are
/// rejected before anything is decompressed.
pub fn decode(tile_data: &str, width: i32, depth: i32) -> Result<TileGrid, MapError> {
    let cells = TileGrid::cell_count(width, depth)?;
    let compressed = STANDARD.decode(tile_data.trim())?;
    let mut rle = Vec::new();
    GzDecoder::new(compressed.as_slice()).read_to_end(&mut rle)?;
    let bytes = rle_decode(&rle, cells)?;
    Ok(TileGrid::from_bytes(width, depth, &bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungen_types::{GridError, Position, Tile};

    #[test]
    fn runs_use_marker() {
        assert_eq!(rle_encode(&[0, 0, 0, 1, 2, 2]), vec![0, 0xFF, 3, 1, 2, 0xFF, 2]);
        assert_eq!(rle_encode(&[]), Vec::<u8>::new());
    }

    #[test]
    fn long_runs_split_at_255() {
        let bytes = vec![1u8; 300];
        let encoded = rle_encode(&bytes);
        assert_eq!(encoded, vec![1, 0xFF, 255, 1, 0xFF, 45]);
        assert_eq!(rle_decode(&encoded, 300).expect("decode"), bytes);
    }

    #[test]
    fn decode_stops_at_cell_count() {
        // A run of 10 clipped to the 4 cells requested.
        assert_eq!(rle_decode(&[2, 0xFF, 10, 3], 4).expect("decode"), vec![2; 4]);
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            rle_decode(&[1, 0xFF], 5),
            Err(MapError::TruncatedRun { offset: 1 })
        ));
        assert!(matches!(
            rle_decode(&[1, 0xFF, 2], 5),
            Err(MapError::ShortTileData {
                expected: 5,
                actual: 2
            })
        ));
    }

    #[test]
    fn grid_survives_packing() {
        let mut grid = TileGrid::new(30, 20);
        for x in 5..12 {
            grid.set(Position::new(x, 7), Tile::Floor);
            grid.set(Position::new(x, 6), Tile::Wall);
        }
        grid.set(Position::new(12, 7), Tile::Door);
        let packed = encode(&grid).expect("encode");
        assert_eq!(decode(&packed, 30, 20).expect("decode"), grid);
    }

    #[test]
    fn bad_payloads_are_rejected() {
        assert!(matches!(decode("!!not base64!!", 2, 2), Err(MapError::Base64(_))));
        let not_gzip = STANDARD.encode([1, 2, 3]);
        assert!(matches!(decode(&not_gzip, 2, 2), Err(MapError::Io(_))));
    }

    #[test]
    fn oversized_header_is_rejected() {
        let packed = encode(&TileGrid::new(2, 2)).expect("encode");
        assert!(matches!(
            decode(&packed, 50_000, 50_000),
            Err(MapError::Grid(GridError::TooLarge { .. }))
        ));
        assert!(matches!(
            decode(&packed, i32::MAX, i32::MAX),
            Err(MapError::Grid(GridError::TooLarge { .. }))
        ));
        // Fits the limit but the payload only covers four cells.
        assert!(matches!(
            decode(&packed, 4096, 4096),
            Err(MapError::ShortTileData { actual: 4, .. })
        ));
    }

    #[test]
    fn huge_cell_count_with_tiny_input() {
        assert!(matches!(
            rle_decode(&[1], usize::MAX),
            Err(MapError::ShortTileData { actual: 1, .. })
        ));
    }

    #[test]
    fn unknown_tile_value_is_rejected() {
        let mut gz = GzEncoder::new(Vec::new(), Compression::default());
        gz.write_all(&[7, 0xFF, 4]).expect("write");
        let packed = STANDARD.encode(gz.finish().expect("finish"));
        assert!(matches!(decode(&packed, 2, 2), Err(MapError::Grid(_))));
    }
}
