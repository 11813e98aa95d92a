//! Synthetic-buffer decode tests for every format family and variant.

use retrobitmaps::*;

/// Minimal ART bitmap header: zero pad, u16 width at 2, u16 height at 6.
fn art_bitmap_header(width: u16, height: u16) -> Vec<u8> {
    let mut h = vec![0u8; 16];
    h[2..4].copy_from_slice(&width.to_le_bytes());
    h[6..8].copy_from_slice(&height.to_le_bytes());
    h
}

/// 128-byte PCX header.
fn pcx_header(bpp: u8, xmax: u16, ymax: u16, nplanes: u8, bytes_per_line: u16) -> Vec<u8> {
    let mut h = vec![0u8; 128];
    h[0] = 0x0A;
    h[1] = 5; // version
    h[2] = 1; // RLE encoding
    h[3] = bpp;
    h[8..10].copy_from_slice(&xmax.to_le_bytes());
    h[10..12].copy_from_slice(&ymax.to_le_bytes());
    h[65] = nplanes;
    h[66..68].copy_from_slice(&bytes_per_line.to_le_bytes());
    h
}

fn assert_buffer_invariant(image: &DecodedImage) {
    assert_eq!(
        image.pixels().len(),
        image.width as usize * image.height as usize * image.layout.bytes_per_pixel(),
        "pixel buffer size must equal width * height * channels"
    );
}

// ── ART: bitmap variant ──────────────────────────────────────────────

#[test]
fn art_bitmap_decodes_scanlines() {
    // width 64 → 8 bytes per line, already word-aligned; with the shifted
    // scanline start, row 0's pixel data lands exactly at offset 16.
    let mut data = art_bitmap_header(64, 1);
    data.extend_from_slice(&[0xFF, 0x00, 0xAA, 0x00, 0x00, 0x00, 0x00, 0x00]);

    assert_eq!(
        art::sniff(&data).unwrap(),
        art::ArtVariant::Bitmap {
            width: 64,
            height: 1
        }
    );

    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (64, 1));
    assert_eq!(image.layout, PixelLayout::Gray8);
    assert_buffer_invariant(&image);

    assert!(image.pixels()[..8].iter().all(|&p| p == 255));
    assert!(image.pixels()[8..16].iter().all(|&p| p == 0));
    assert_eq!(&image.pixels()[16..20], &[255, 0, 255, 0]);
}

#[test]
fn art_bitmap_offset_underflow_yields_zero_row() {
    // width 8 → bytes_per_line 2, so the shifted start points back into the
    // zeroed header; the 0xFF scanline byte must never be reached.
    let mut data = art_bitmap_header(8, 1);
    data.extend_from_slice(&[0x00, 0xFF]);

    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (8, 1));
    assert!(image.pixels().iter().all(|&p| p == 0));
}

#[test]
fn art_bitmap_sniff_honors_truncation_tolerance() {
    // 100×100 needs 1250 body bytes; up to 100 may be missing.
    let mut data = art_bitmap_header(100, 100);
    data.resize(16 + 1250 - 100, 0);
    assert_eq!(
        art::sniff(&data).unwrap(),
        art::ArtVariant::Bitmap {
            width: 100,
            height: 100
        }
    );

    data.pop();
    assert_eq!(art::sniff(&data).unwrap(), art::ArtVariant::Generic);
}

// ── ART: AOL-compressed variant ──────────────────────────────────────

#[test]
fn art_aol_count_prefixed_runs() {
    let mut data = b"ART\0".to_vec();
    data.extend_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&[0, 0, 0, 0]); // header padding
    // run of 3×7, literal [1, 2], 2-byte no-op, run of 1×9; shortfall pads 0
    data.extend_from_slice(&[0x83, 0x07, 0x02, 0x01, 0x02, 0x00, 0xFF, 0x81, 0x09]);

    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (4, 2));
    assert_eq!(image.pixels(), &[7, 7, 7, 1, 2, 9, 0, 0]);
}

#[test]
fn art_aol_invalid_dimensions_fall_back() {
    let mut data = b"ART\0".to_vec();
    data.extend_from_slice(&[0, 0, 0, 0]); // width 0, height 0
    data.resize(16, 0);

    match art::sniff(&data).unwrap() {
        art::ArtVariant::Aol { dims } => {
            assert!(dims.fallback);
            assert_eq!((dims.width, dims.height), (640, 480));
        }
        other => panic!("expected Aol variant, got {other:?}"),
    }

    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (640, 480));
    assert_buffer_invariant(&image);
    assert_eq!(image.pixels()[0], 0);
}

// ── ART: PFS variant ─────────────────────────────────────────────────

#[test]
fn art_pfs_raw_bits() {
    let mut data = vec![0x01, 0x00];
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.resize(10, 0);
    data.extend_from_slice(&[0xB0, 0xFF]);
    data.resize(16, 0); // minimum file size padding

    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (16, 1));
    assert_eq!(
        image.pixels(),
        &[255, 0, 255, 255, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255]
    );
}

#[test]
fn art_pfs_invalid_dimensions_fall_back() {
    let mut data = vec![0x01, 0x00];
    data.resize(16, 0); // width 0, height 0 in header

    match art::sniff(&data).unwrap() {
        art::ArtVariant::Pfs { dims } => {
            assert!(dims.fallback);
            assert_eq!((dims.width, dims.height), (320, 200));
        }
        other => panic!("expected Pfs variant, got {other:?}"),
    }
}

// ── ART: generic fallback ────────────────────────────────────────────

#[test]
fn art_generic_picks_first_fitting_resolution() {
    // 64000 bytes fits 320×200, the first candidate in the table.
    let data = vec![0x55u8; 64000];
    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (320, 200));
    assert!(image.is_borrowed(), "raw grayscale fallback is zero-copy");
    assert_eq!(image.pixels()[0], 0x55);
    assert_buffer_invariant(&image);
}

#[test]
fn art_generic_crops_small_files() {
    let data = vec![0x77u8; 400];
    let image = decode_art(&data).unwrap();
    assert_eq!((image.width, image.height), (320, 1));
    assert_eq!(image.pixels(), &data[..320]);
}

#[test]
fn art_too_small_is_rejected() {
    assert!(matches!(
        decode_art(&[0u8; 15]),
        Err(DecodeError::TooSmall { needed: 16, .. })
    ));
}

// ── MAC: canonical MacPaint ──────────────────────────────────────────

#[test]
fn mac_packbits_body() {
    let mut data = vec![0u8; 512];
    // repeat 0xFF 128 times → 1024 ink pixels, remainder padded white
    data.extend_from_slice(&[0x81, 0xFF]);

    assert_eq!(mac::sniff(&data).unwrap(), mac::MacVariant::Packed);

    let image = decode_mac(&data).unwrap();
    assert_eq!((image.width, image.height), (576, 720));
    assert_buffer_invariant(&image);
    assert!(image.pixels()[..1024].iter().all(|&p| p == 0));
    assert_eq!(image.pixels()[1024], 255);
}

#[test]
fn mac_raw_body() {
    let mut data = vec![0u8; 512];
    data.extend_from_slice(&[0x00, 0xFF]);

    assert_eq!(mac::sniff(&data).unwrap(), mac::MacVariant::Raw);

    let image = decode_mac(&data).unwrap();
    assert!(image.pixels()[..8].iter().all(|&p| p == 255));
    assert!(image.pixels()[8..16].iter().all(|&p| p == 0));
    assert_eq!(image.pixels()[16], 255);
}

#[test]
fn mac_pntg_forces_canonical_dimensions() {
    let mut data = vec![0u8; 0x280];
    data[50..54].copy_from_slice(b"PNTG");
    data.extend_from_slice(&[0x81, 0xFF]);

    assert_eq!(mac::sniff(&data).unwrap(), mac::MacVariant::Pntg);

    let image = decode_mac(&data).unwrap();
    assert_eq!((image.width, image.height), (576, 720));
    assert!(image.pixels()[..1024].iter().all(|&p| p == 0));
}

#[test]
fn mac_pntg_truncated_before_body_is_white() {
    let mut data = vec![0u8; 100];
    data[10..14].copy_from_slice(b"PNTG");

    let image = decode_mac(&data).unwrap();
    assert_eq!((image.width, image.height), (576, 720));
    assert!(image.pixels().iter().all(|&p| p == 255));
}

#[test]
fn mac_empty_is_rejected() {
    assert!(matches!(
        decode_mac(&[]),
        Err(DecodeError::TooSmall { .. })
    ));
}

// ── PIC: PICT/PNTG variant ───────────────────────────────────────────

#[test]
fn pic_pict_short_file_uses_alternate_offset() {
    let mut data = vec![0u8; 0x90];
    data[20..24].copy_from_slice(b"PICT");
    data[0x80] = 0x00; // literal run of 1
    data[0x81] = 0xFF;

    assert_eq!(pic::sniff(&data).unwrap(), pic::PicVariant::PntgPict);

    let image = decode_pic(&data).unwrap();
    assert_eq!((image.width, image.height), (576, 720));
    assert_buffer_invariant(&image);
    assert!(image.pixels()[..8].iter().all(|&p| p == 0));
    assert_eq!(image.pixels()[8], 255);
}

#[test]
fn pic_pntg_full_file_uses_pattern_table_offset() {
    let mut data = vec![0u8; 0x280];
    data[60..64].copy_from_slice(b"PNTG");
    data.extend_from_slice(&[0x00, 0xFF]);

    let image = decode_pic(&data).unwrap();
    assert_eq!((image.width, image.height), (576, 720));
    assert!(image.pixels()[..8].iter().all(|&p| p == 0));
}

// ── PIC: standard PICtor ─────────────────────────────────────────────

fn pictor_header(width: u16, height: u16, bpp: u8) -> Vec<u8> {
    let mut h = vec![0u8; 17];
    h[0] = 0x34;
    h[1] = 0x12;
    h[2..4].copy_from_slice(&width.to_le_bytes());
    h[4..6].copy_from_slice(&height.to_le_bytes());
    h[6] = bpp;
    h
}

#[test]
fn pictor_8bit_resolves_6bit_palette() {
    let mut data = pictor_header(2, 2, 8);
    let mut palette = vec![0u8; 768];
    palette[3..6].copy_from_slice(&[63, 0, 0]); // entry 1: full red in 6-bit
    data.extend_from_slice(&palette);
    data.extend_from_slice(&[0xC4, 0x01]); // run of 4 × index 1

    assert_eq!(pic::sniff(&data).unwrap(), pic::PicVariant::PictorStandard);

    let image = decode_pic(&data).unwrap();
    assert_eq!((image.width, image.height), (2, 2));
    assert_eq!(image.layout, PixelLayout::Rgb8);
    assert_buffer_invariant(&image);
    assert_eq!(image.pixels(), [255u8, 0, 0].repeat(4).as_slice());

    let palette = image.palette.as_ref().expect("palette should be attached");
    assert_eq!(palette.color(1), [255, 0, 0]);
}

#[test]
fn pictor_1bit_thresholds_output() {
    let mut data = pictor_header(4, 1, 1);
    data.extend_from_slice(&[0x01, 0x00, 0x01, 0x00]);

    let image = decode_pic(&data).unwrap();
    assert_eq!(image.layout, PixelLayout::Gray8);
    assert_eq!(image.pixels(), &[255, 0, 255, 0]);
}

#[test]
fn pictor_shortfall_refills_from_body_start() {
    // Run stream yields 2 of 4 pixels; the remainder is topped up from the
    // start of the body, quirk intact.
    let mut data = pictor_header(4, 1, 8);
    data.extend_from_slice(&[0xC2, 0x07]);

    let image = decode_pic(&data).unwrap();
    assert_eq!(image.pixels(), &[7, 7, 0xC2, 0x07]);
}

#[test]
fn pictor_invalid_dimensions_are_rejected() {
    let mut data = pictor_header(0, 5, 8);
    data.resize(32, 0);
    assert!(matches!(
        decode_pic(&data),
        Err(DecodeError::InvalidDimensions { .. })
    ));
}

// ── PIC: generic fallback ────────────────────────────────────────────

#[test]
fn pic_generic_picks_first_fitting_resolution() {
    // 640×480 is first in the PIC table; the assumed 256-byte header is
    // skipped before bit expansion.
    let data = vec![0x55u8; 640 * 480 + 256];
    assert_eq!(pic::sniff(&data).unwrap(), pic::PicVariant::Generic);

    let image = decode_pic(&data).unwrap();
    assert_eq!((image.width, image.height), (640, 480));
    assert_eq!(&image.pixels()[..4], &[0, 255, 0, 255]);
}

#[test]
fn pic_generic_small_file_falls_back_dark() {
    let data = vec![0u8; 20];
    let image = decode_pic(&data).unwrap();
    assert_eq!((image.width, image.height), (320, 200));
    assert!(image.pixels().iter().all(|&p| p == 0));
}

#[test]
fn pic_too_small_is_rejected() {
    assert!(matches!(
        decode_pic(&[0u8; 16]),
        Err(DecodeError::TooSmall { needed: 17, .. })
    ));
}

// ── PCX: 8-bit paletted ──────────────────────────────────────────────

#[test]
fn pcx_8bit_with_vga_trailer() {
    let mut data = pcx_header(8, 3, 3, 1, 4);
    data.extend_from_slice(&(0u8..16).collect::<Vec<_>>());
    data.push(0x0C);
    for i in 0..=255u8 {
        data.extend_from_slice(&[i, i, i]); // identity palette
    }

    let image = decode_pcx(&data).unwrap();
    assert_eq!((image.width, image.height), (4, 4));
    assert_eq!(image.layout, PixelLayout::Rgb8);
    assert_buffer_invariant(&image);

    // pixel (0,0) is the palette color for index byte 0
    assert_eq!(&image.pixels()[..3], &[0, 0, 0]);
    // pixel (1,1) is index 5
    assert_eq!(&image.pixels()[(4 + 1) * 3..(4 + 2) * 3], &[5, 5, 5]);

    let palette = image.palette.as_ref().expect("palette should be attached");
    assert_eq!(palette.len(), 256);
}

#[test]
fn pcx_8bit_without_trailer_is_grayscale() {
    let mut data = pcx_header(8, 3, 3, 1, 4);
    data.extend_from_slice(&(0u8..16).collect::<Vec<_>>());

    let image = decode_pcx(&data).unwrap();
    assert_eq!(image.layout, PixelLayout::Gray8);
    assert!(image.palette.is_none());
    assert_eq!(image.pixels(), &(0u8..16).collect::<Vec<_>>()[..]);
}

// ── PCX: monochrome and 16-color ─────────────────────────────────────

#[test]
fn pcx_1bit_rows_stop_at_width() {
    let mut data = pcx_header(1, 7, 1, 1, 2);
    // row 0: run of 2 × 0xAA; row 1: literal 0x0F 0xF0
    data.extend_from_slice(&[0xC2, 0xAA, 0x0F, 0xF0]);

    let image = decode_pcx(&data).unwrap();
    assert_eq!((image.width, image.height), (8, 2));
    assert_eq!(
        &image.pixels()[..8],
        &[255, 0, 255, 0, 255, 0, 255, 0],
        "row 0 expands only the first scanline byte"
    );
    assert_eq!(&image.pixels()[8..], &[0, 0, 0, 0, 255, 255, 255, 255]);
}

#[test]
fn pcx_4bit_resolves_header_palette() {
    let mut data = pcx_header(4, 1, 0, 1, 1);
    data[19..22].copy_from_slice(&[10, 20, 30]); // entry 1
    data[22..25].copy_from_slice(&[40, 50, 60]); // entry 2
    data.push(0x12); // nibbles 1, 2

    let image = decode_pcx(&data).unwrap();
    assert_eq!((image.width, image.height), (2, 1));
    assert_eq!(image.pixels(), &[10, 20, 30, 40, 50, 60]);
    assert!(image.palette.is_some());
}

// ── PCX: planar ──────────────────────────────────────────────────────

#[test]
fn pcx_4plane_ega_indices() {
    let mut data = pcx_header(1, 7, 0, 4, 1);
    data[19..22].copy_from_slice(&[1, 2, 3]); // header palette entry 1
    // plane 0 = 0xFF, planes 1-3 = 0x00 → index 1 for every column
    data.extend_from_slice(&[0xC1, 0xFF, 0xC3, 0x00]);

    let image = decode_pcx(&data).unwrap();
    assert_eq!((image.width, image.height), (8, 1));
    assert_eq!(image.layout, PixelLayout::Rgb8);
    assert_eq!(image.pixels(), [1u8, 2, 3].repeat(8).as_slice());
    assert!(image.palette.is_some());
}

#[test]
fn pcx_3plane_direct_rgb() {
    let mut data = pcx_header(1, 7, 0, 3, 1);
    // R plane 0xFF, G plane 0x0F, B plane 0x00
    data.extend_from_slice(&[0xC1, 0xFF, 0xC1, 0x0F, 0xC1, 0x00]);

    let image = decode_pcx(&data).unwrap();
    assert_eq!(&image.pixels()[..3], &[255, 0, 0]);
    assert_eq!(&image.pixels()[4 * 3..5 * 3], &[255, 255, 0]);
    assert!(image.palette.is_none());
}

// ── PCX: header validation ───────────────────────────────────────────

#[test]
fn pcx_reversed_extents_are_rejected() {
    let mut data = pcx_header(8, 1, 3, 1, 4);
    data[4..6].copy_from_slice(&5u16.to_le_bytes()); // xmin 5 > xmax 1
    data.resize(256, 0);
    assert!(matches!(
        decode_pcx(&data),
        Err(DecodeError::InvalidDimensions { .. })
    ));
}

#[test]
fn pcx_bad_manufacturer_is_rejected() {
    assert!(matches!(
        decode_pcx(&[0u8; 128]),
        Err(DecodeError::BadSignature("PCX"))
    ));
}

#[test]
fn pcx_too_small_is_rejected() {
    assert!(matches!(
        decode_pcx(&[0x0A; 127]),
        Err(DecodeError::TooSmall { needed: 128, .. })
    ));
}

#[test]
fn pcx_unsupported_depth_is_rejected() {
    let data = pcx_header(2, 3, 3, 1, 4);
    assert!(matches!(
        decode_pcx(&data),
        Err(DecodeError::UnrecognizedVariant(_))
    ));
}

#[test]
fn pcx_uncompressed_body_is_all_literal() {
    let mut data = pcx_header(8, 1, 0, 1, 2);
    data[2] = 0; // encoding: none
    data.extend_from_slice(&[0xC5, 0x01]); // 0xC5 stays a literal

    let image = decode_pcx(&data).unwrap();
    assert_eq!(image.pixels(), &[0xC5, 0x01]);
}

// ── Limits ───────────────────────────────────────────────────────────

#[test]
fn limits_max_width() {
    let mut data = pcx_header(8, 3, 3, 1, 4);
    data.extend_from_slice(&[0u8; 16]);
    let limits = Limits {
        max_width: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        decode_pcx_with_limits(&data, &limits),
        Err(DecodeError::LimitExceeded(_))
    ));
}

#[test]
fn limits_max_pixels() {
    let data = vec![0x55u8; 64000];
    let limits = Limits {
        max_pixels: Some(100),
        ..Default::default()
    };
    assert!(matches!(
        decode_art_with_limits(&data, &limits),
        Err(DecodeError::LimitExceeded(_))
    ));
}

#[test]
fn limits_max_memory() {
    let data = vec![0u8; 600];
    let limits = Limits {
        max_memory_bytes: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        decode_mac_with_limits(&data, &limits),
        Err(DecodeError::LimitExceeded(_))
    ));
}

// ── Auto-detection ───────────────────────────────────────────────────

#[test]
fn auto_detect_prefers_pcx() {
    let mut data = pcx_header(8, 3, 3, 1, 4);
    data.extend_from_slice(&[0u8; 16]);
    let image = decode_auto(&data).unwrap();
    assert_eq!((image.width, image.height), (4, 4));
}

#[test]
fn auto_detect_falls_through_to_art() {
    // Leading 0x0A parses as a PCX header but with an unsupported
    // depth/plane combination, so detection falls through to ART.
    let data = vec![0x0Au8; 400];
    let image = decode_auto(&data).unwrap();
    assert_eq!((image.width, image.height), (320, 1));
}

// ── TIFF passthrough ─────────────────────────────────────────────────

#[cfg(feature = "tiff")]
mod tiff {
    use retrobitmaps::*;

    fn encode_tiff_rgb(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([x as u8 * 10, y as u8 * 10, 7])
        });
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Tiff).unwrap();
        buf.into_inner()
    }

    #[test]
    fn tiff_rgb_normalizes_to_rgb8() {
        let data = encode_tiff_rgb(3, 2);
        let decoded = decode_tiff(&data).unwrap();
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.layout, PixelLayout::Rgb8);
        assert_eq!(&decoded.pixels()[..3], &[0, 0, 7]);
        assert_eq!(
            decoded.pixels().len(),
            3 * 2 * decoded.layout.bytes_per_pixel()
        );
    }

    #[test]
    fn tiff_gray_stays_gray8() {
        let img = image::GrayImage::from_fn(4, 4, |x, y| image::Luma([(x + y) as u8 * 16]));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Tiff).unwrap();

        let decoded = decode_tiff(buf.get_ref()).unwrap();
        assert_eq!(decoded.layout, PixelLayout::Gray8);
        assert_eq!(decoded.pixels()[0], 0);
        assert_eq!(decoded.pixels()[15], 96);
    }

    #[test]
    fn tiff_garbage_is_rejected() {
        assert!(matches!(
            decode_tiff(b"not a tiff at all"),
            Err(DecodeError::Tiff(_))
        ));
    }
}
