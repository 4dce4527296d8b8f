use bitflags::bitflags;
use modular_bitfield::prelude::*;
use strum_macros::AsRefStr;

use crate::bits::{self, BitIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum StatusFlag {
    Available,
    Loaded,
    Active,
    Configured,
    Validated,
    Locked,
    Error,
    Ready,
}

impl StatusFlag {
    /// Ordered LSB to MSB.
    pub const ALL: [StatusFlag; 8] = [
        StatusFlag::Available,
        StatusFlag::Loaded,
        StatusFlag::Active,
        StatusFlag::Configured,
        StatusFlag::Validated,
        StatusFlag::Locked,
        StatusFlag::Error,
        StatusFlag::Ready,
    ];

    pub const fn index(self) -> BitIndex {
        BitIndex::ALL[self as usize]
    }

    pub fn at(index: BitIndex) -> Self {
        Self::ALL[index.get() as usize]
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        const Available = 1 << 0;
        const Loaded = 1 << 1;
        const Active = 1 << 2;
        const Configured = 1 << 3;
        const Validated = 1 << 4;
        const Locked = 1 << 5;
        const Error = 1 << 6;
        const Ready = 1 << 7;
    }
}

impl From<StatusFlag> for StatusFlags {
    fn from(flag: StatusFlag) -> Self {
        StatusFlags::from_bits_retain(bits::mask(flag.index()))
    }
}

// The first declared field occupies bit 0.
#[bitfield]
#[derive(Clone, Copy, Debug)]
pub struct StatusFields {
    pub available: bool,
    pub loaded: bool,
    pub active: bool,
    pub configured: bool,
    pub validated: bool,
    pub locked: bool,
    pub error: bool,
    pub ready: bool,
}

/// Named read-only view of a status byte. Every accessor goes through
/// [`bits::extract_at`], so no particular memory layout is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusByte(u8);

impl StatusByte {
    pub const fn new(byte: u8) -> Self {
        StatusByte(byte)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn get(self, flag: StatusFlag) -> bool {
        bits::extract_at(self.0, flag.index())
    }

    pub const fn available(self) -> bool {
        self.get(StatusFlag::Available)
    }

    pub const fn loaded(self) -> bool {
        self.get(StatusFlag::Loaded)
    }

    pub const fn active(self) -> bool {
        self.get(StatusFlag::Active)
    }

    pub const fn configured(self) -> bool {
        self.get(StatusFlag::Configured)
    }

    pub const fn validated(self) -> bool {
        self.get(StatusFlag::Validated)
    }

    pub const fn locked(self) -> bool {
        self.get(StatusFlag::Locked)
    }

    pub const fn error(self) -> bool {
        self.get(StatusFlag::Error)
    }

    pub const fn ready(self) -> bool {
        self.get(StatusFlag::Ready)
    }

    /// Every flag with its value, read through the named accessors, LSB first.
    pub const fn named(self) -> [(StatusFlag, bool); 8] {
        [
            (StatusFlag::Available, self.available()),
            (StatusFlag::Loaded, self.loaded()),
            (StatusFlag::Active, self.active()),
            (StatusFlag::Configured, self.configured()),
            (StatusFlag::Validated, self.validated()),
            (StatusFlag::Locked, self.locked()),
            (StatusFlag::Error, self.error()),
            (StatusFlag::Ready, self.ready()),
        ]
    }

    pub fn flags(self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.0)
    }

    pub fn fields(self) -> StatusFields {
        StatusFields::from_bytes([self.0])
    }
}

impl From<u8> for StatusByte {
    fn from(byte: u8) -> Self {
        StatusByte(byte)
    }
}
