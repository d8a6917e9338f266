use std::path::Path;

use codec8::{ExtendedProperties, Frame, Properties, avec};
use csv::ReaderBuilder;

#[test]
fn decode_slice_codec8_single() {
    const PATH: &str = "fixtures/codec8-single.hex";
    let data = read_hex(PATH);
    let frame = avec::decode_slice_as::<Properties>(&data).unwrap();
    Validator::new(PATH).validate(&frame);
}

#[test]
fn decode_slice_codec8_pair() {
    const PATH: &str = "fixtures/codec8-pair.hex";
    let data = read_hex(PATH);
    let frame = avec::decode_slice_as::<Properties>(&data).unwrap();
    Validator::new(PATH).validate(&frame);
}

#[test]
fn decode_slice_codec8_moving() {
    const PATH: &str = "fixtures/codec8-moving.hex";
    let data = read_hex(PATH);
    let frame = avec::decode_slice_as::<Properties>(&data).unwrap();
    Validator::new(PATH).validate(&frame);
}

#[test]
fn decode_slice_codec8_extended_single() {
    const PATH: &str = "fixtures/codec8e-single.hex";
    let data = read_hex(PATH);
    let frame = avec::decode_slice_as::<ExtendedProperties>(&data).unwrap();
    Validator::new(PATH).validate(&frame);
}

#[test]
fn decode_slice_codec8_extended_moving() {
    const PATH: &str = "fixtures/codec8e-moving.hex";
    let data = read_hex(PATH);
    let frame = avec::decode_slice_as::<ExtendedProperties>(&data).unwrap();
    Validator::new(PATH).validate(&frame);
}

#[test]
fn decode_hex_detects_codec() {
    let text = std::fs::read_to_string("fixtures/codec8-moving.hex").unwrap();
    let frame = avec::decode_hex(text.trim()).unwrap();
    Validator::new("fixtures/codec8-moving.hex").validate(&frame.unwrap_left());

    let text = std::fs::read_to_string("fixtures/codec8e-moving.hex").unwrap();
    let frame = avec::decode_hex(text.trim()).unwrap();
    Validator::new("fixtures/codec8e-moving.hex").validate(&frame.unwrap_right());
}

fn read_hex(path: impl AsRef<Path>) -> Vec<u8> {
    let text = std::fs::read_to_string(path).unwrap();
    avec::text::to_bytes(text.trim()).unwrap()
}

/// Walks a frame alongside the expected rows of its `.csv` companion.
struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn next(&mut self, tag: &str) -> Vec<String> {
        let mut row = self.0.remove(0);
        assert_eq!(row.remove(0), tag);
        row
    }

    fn validate<P: Entries>(mut self, frame: &Frame<P>) {
        let row = self.next("frame");
        assert_eq!(row[0], frame.codec_id.to_string());
        assert_eq!(row[1], frame.leading_count.to_string());
        assert_eq!(row[2], frame.trailing_count.to_string());
        assert_eq!(row[3], frame.crc.to_string());
        assert_eq!(row[4], frame.data_length.to_string());

        assert_eq!(frame.records.len(), usize::from(frame.leading_count));

        for record in &frame.records {
            let gps = &record.gps;
            let row = self.next("record");

            let found = [
                record.timestamp.to_string(),
                (record.priority as u8).to_string(),
                gps.longitude.to_string(),
                gps.latitude.to_string(),
                gps.altitude.to_string(),
                gps.angle.to_string(),
                gps.satellites.to_string(),
                gps.speed.to_string(),
                record.properties.event_id().to_string(),
                record.properties.total().to_string(),
            ];
            assert_eq!(row, found);

            for (tag, id, value) in record.properties.entries() {
                let row = self.next(tag);
                assert_eq!(row, [id.to_string(), value]);
            }
        }

        assert!(self.0.is_empty(), "unvisited rows: {:?}", self.0);
    }
}

/// Flattens a property block into `(bucket, id, value)` rows.
trait Entries {
    fn event_id(&self) -> u16;
    fn total(&self) -> u16;
    fn entries(&self) -> Vec<(&'static str, u16, String)>;
}

impl Entries for Properties {
    fn event_id(&self) -> u16 {
        self.event_id.into()
    }

    fn total(&self) -> u16 {
        self.total.into()
    }

    fn entries(&self) -> Vec<(&'static str, u16, String)> {
        let mut rows = vec![];
        rows.extend(self.one_byte.iter().map(|(id, v)| ("1", u16::from(*id), v.to_string())));
        rows.extend(self.two_byte.iter().map(|(id, v)| ("2", u16::from(*id), v.to_string())));
        rows.extend(self.four_byte.iter().map(|(id, v)| ("4", u16::from(*id), v.to_string())));
        rows.extend(self.eight_byte.iter().map(|(id, v)| ("8", u16::from(*id), v.to_string())));
        rows
    }
}

impl Entries for ExtendedProperties {
    fn event_id(&self) -> u16 {
        self.event_id
    }

    fn total(&self) -> u16 {
        self.total
    }

    fn entries(&self) -> Vec<(&'static str, u16, String)> {
        let mut rows = vec![];
        rows.extend(self.one_byte.iter().map(|(id, v)| ("1", *id, v.to_string())));
        rows.extend(self.two_byte.iter().map(|(id, v)| ("2", *id, v.to_string())));
        rows.extend(self.four_byte.iter().map(|(id, v)| ("4", *id, v.to_string())));
        rows.extend(self.eight_byte.iter().map(|(id, v)| ("8", *id, v.to_string())));
        rows.extend(
            self.variable
                .iter()
                .map(|(id, v)| ("x", *id, hex::encode_upper(v))),
        );
        rows
    }
}
