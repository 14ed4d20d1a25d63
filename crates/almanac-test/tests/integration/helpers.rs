use almanac_temporal::{DateRange, Timestamp};

pub fn day(y: i32, m: u32, d: u32) -> Timestamp {
    Timestamp::day(y, m, d).expect("valid date")
}

pub fn hour(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
    Timestamp::hour(y, m, d, h).expect("valid hour")
}

pub fn minute(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    Timestamp::minute(y, mo, d, h, mi).expect("valid minute")
}

pub fn second(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    Timestamp::second(y, mo, d, h, mi, s).expect("valid second")
}

pub fn days(start: Timestamp, end: Timestamp) -> DateRange {
    DateRange::new(start, end)
}
