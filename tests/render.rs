use std::fs::{self, File};
use std::path::PathBuf;

use nth_conway::LifeError;
use nth_conway::life::{Grid, Seed, initialize, run};
use nth_conway::render::{ConsoleRenderer, Polarity, RasterEncoder};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nth_conway_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn decode(path: &PathBuf) -> (png::OutputInfo, Vec<u8>, Vec<(String, String)>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    let text = reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect();
    (info, buf, text)
}

#[test]
fn png_has_scaled_grayscale_blocks() {
    let dir = scratch_dir("png_blocks");
    let path = dir.join("board.png");
    let grid = Grid::with_live_cells(4, 3, &[(0, 0), (1, 2), (2, 3)]).unwrap();

    RasterEncoder::new(5).unwrap().write_png(&grid, &path).unwrap();

    let (info, pixels, text) = decode(&path);
    assert_eq!((info.width, info.height), (20, 15));
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    for y in 0..15usize {
        for x in 0..20usize {
            let expected = if grid.is_alive(y / 5, x / 5) { 0 } else { 255 };
            assert_eq!(pixels[y * 20 + x], expected, "pixel ({x},{y})");
        }
    }
    assert!(text.iter().any(|(k, _)| k == "Title"));

    // Only the finished image remains in the directory.
    let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn png_respects_inverted_polarity() {
    let dir = scratch_dir("png_inverted");
    let path = dir.join("board.png");
    let grid = Grid::with_live_cells(2, 1, &[(0, 1)]).unwrap();

    RasterEncoder::new(1)
        .unwrap()
        .with_polarity(Polarity::AliveLight)
        .write_png(&grid, &path)
        .unwrap();

    let (_, pixels, _) = decode(&path);
    assert_eq!(pixels, vec![0, 255]);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn png_overwrites_existing_file() {
    let dir = scratch_dir("png_overwrite");
    let path = dir.join("board.png");
    fs::write(&path, b"stale").unwrap();

    let grid = Grid::dead(3, 3).unwrap();
    RasterEncoder::new(2).unwrap().write_png(&grid, &path).unwrap();

    let (info, _, _) = decode(&path);
    assert_eq!((info.width, info.height), (6, 6));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = scratch_dir("png_missing");
    let path = dir.join("no_such_dir").join("board.png");
    let grid = Grid::dead(2, 2).unwrap();

    let err = RasterEncoder::new(1).unwrap().write_png(&grid, &path).unwrap_err();
    match err {
        LifeError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(!path.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_rename_leaves_no_partial_file() {
    let dir = scratch_dir("png_rename");
    // The target is a non-empty directory, so the final rename fails.
    let target = dir.join("occupied");
    fs::create_dir_all(target.join("inner")).unwrap();
    let grid = Grid::dead(2, 2).unwrap();

    let err = RasterEncoder::new(1).unwrap().write_png(&grid, &target).unwrap_err();
    assert!(matches!(err, LifeError::Io { .. }));

    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["occupied".to_string()]);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn console_prints_every_generation_with_separators() {
    let initial = Grid::with_live_cells(3, 3, &[(1, 0), (1, 1), (1, 2)]).unwrap();
    let renderer = ConsoleRenderer::default().alive('#').dead('.');
    let mut out = Vec::new();
    for grid in run(initial, 2).iter() {
        renderer.write_generation(&mut out, &grid).unwrap();
    }
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "...\n###\n...\n\n\
         .#.\n.#.\n.#.\n\n\
         ...\n###\n...\n\n"
    );
}

#[test]
fn console_lines_match_grid_shape() {
    let grid = initialize(7, 4, &mut Seed::Fixed(5).rng()).unwrap();
    let text = ConsoleRenderer::default().render(&grid);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.chars().count() == 7));
    let alive = text.chars().filter(|&c| c == '█').count();
    assert_eq!(alive, grid.population());
}
