//! Frame encoder for building valid test inputs.

#![allow(dead_code)]

use codec8::{ExtendedProperties, Gps, Properties, sans::check::{compute_crc, crc_field}};

/// Offset of the first record in a frame.
pub const FIRST_RECORD: usize = 10;

pub fn encode_gps(gps: &Gps) -> Vec<u8> {
    let mut r = vec![];
    r.extend(gps.longitude.to_be_bytes());
    r.extend(gps.latitude.to_be_bytes());
    r.extend(gps.altitude.to_be_bytes());
    r.extend(gps.angle.to_be_bytes());
    r.push(gps.satellites);
    r.extend(gps.speed.to_be_bytes());
    r
}

pub fn encode_properties(p: &Properties) -> Vec<u8> {
    let mut r = vec![p.event_id, p.total];

    r.push(p.one_byte.len() as u8);
    for (id, v) in &p.one_byte {
        r.push(*id);
        r.push(*v);
    }
    r.push(p.two_byte.len() as u8);
    for (id, v) in &p.two_byte {
        r.push(*id);
        r.extend(v.to_be_bytes());
    }
    r.push(p.four_byte.len() as u8);
    for (id, v) in &p.four_byte {
        r.push(*id);
        r.extend(v.to_be_bytes());
    }
    r.push(p.eight_byte.len() as u8);
    for (id, v) in &p.eight_byte {
        r.push(*id);
        r.extend(v.to_be_bytes());
    }

    r
}

pub fn encode_extended_properties(p: &ExtendedProperties) -> Vec<u8> {
    let mut r = vec![];
    r.extend(p.event_id.to_be_bytes());
    r.extend(p.total.to_be_bytes());

    r.extend((p.one_byte.len() as u16).to_be_bytes());
    for (id, v) in &p.one_byte {
        r.extend(id.to_be_bytes());
        r.push(*v);
    }
    r.extend((p.two_byte.len() as u16).to_be_bytes());
    for (id, v) in &p.two_byte {
        r.extend(id.to_be_bytes());
        r.extend(v.to_be_bytes());
    }
    r.extend((p.four_byte.len() as u16).to_be_bytes());
    for (id, v) in &p.four_byte {
        r.extend(id.to_be_bytes());
        r.extend(v.to_be_bytes());
    }
    r.extend((p.eight_byte.len() as u16).to_be_bytes());
    for (id, v) in &p.eight_byte {
        r.extend(id.to_be_bytes());
        r.extend(v.to_be_bytes());
    }
    r.extend((p.variable.len() as u16).to_be_bytes());
    for (id, v) in &p.variable {
        r.extend(id.to_be_bytes());
        r.extend((v.len() as u16).to_be_bytes());
        r.extend(v);
    }

    r
}

pub fn encode_record(timestamp: u64, priority: u8, gps: &Gps, properties: &[u8]) -> Vec<u8> {
    let mut r = vec![];
    r.extend(timestamp.to_be_bytes());
    r.push(priority);
    r.extend(encode_gps(gps));
    r.extend(properties);
    r
}

/// Wrap encoded records in a frame envelope with a valid checksum.
pub fn encode_frame(codec_id: u8, records: &[Vec<u8>]) -> Vec<u8> {
    let count = records.len() as u8;

    let mut payload = vec![codec_id, count];
    for record in records {
        payload.extend(record);
    }
    payload.push(count);

    let mut r = vec![0, 0, 0, 0];
    r.extend((payload.len() as u32).to_be_bytes());
    r.extend(&payload);
    r.extend(crc_field(compute_crc(0, &payload)));
    r
}
