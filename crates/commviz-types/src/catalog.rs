//! Static topic catalog
//!
//! Every value here is a fixed illustration. Nothing is derived from
//! anything else at runtime: "KHOOR" is written down, not enciphered.

use serde::Serialize;

use crate::{Difficulty, Topic};

/// Catalog entry describing a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicInfo {
    pub topic: Topic,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
}

/// One example value drawn inside a diagram box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub text: &'static str,
    pub caption: &'static str,
    /// Waveform sketch drawn under the value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<&'static str>,
}

/// Bullet from the "how it works" section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    pub term: &'static str,
    pub detail: &'static str,
}

/// Display constants for one topic's diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub heading: &'static str,
    pub purpose: &'static str,
    pub source_role: &'static str,
    pub destination_role: &'static str,
    pub forward: &'static str,
    pub reverse: &'static str,
    pub forward_parameter: &'static str,
    pub reverse_parameter: &'static str,
    pub original: &'static [Sample],
    pub transformed: &'static [Sample],
    pub channel: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_note: Option<&'static str>,
    pub notes: &'static [Note],
}

const DIGITAL_WAVE: &str = "_|‾|_|‾|_|‾|_";
const ANALOG_WAVE: &str = "∿∿∿∿∿∿∿";

static ENCRYPTION: Panel = Panel {
    heading: "Encryptor/Decryptor",
    purpose: "Secures data by converting readable information into scrambled format (encryption) and back (decryption)",
    source_role: "SENDER",
    destination_role: "RECEIVER",
    forward: "ENCRYPTOR",
    reverse: "DECRYPTOR",
    forward_parameter: "KEY: 3",
    reverse_parameter: "KEY: 3",
    original: &[Sample {
        text: "HELLO",
        caption: "Plain Text",
        glyph: None,
    }],
    transformed: &[Sample {
        text: "KHOOR",
        caption: "Cipher Text",
        glyph: None,
    }],
    channel: "Insecure Channel",
    channel_note: None,
    notes: &[
        Note {
            term: "Encryption",
            detail: "A secret key and an algorithm (AES, RSA) turn plaintext into unreadable ciphertext",
        },
        Note {
            term: "Decryption",
            detail: "The same (symmetric) or paired (asymmetric) key turns ciphertext back into plaintext",
        },
        Note {
            term: "Example",
            detail: "A Caesar cipher shifts each letter by 3 positions (H→K, E→H, L→O, L→O, O→R)",
        },
        Note {
            term: "Real-world use",
            detail: "HTTPS, VPNs, encrypted messaging apps",
        },
    ],
};

static ENCODING: Panel = Panel {
    heading: "Encoder/Decoder",
    purpose: "Converts data into a suitable format for transmission or storage",
    source_role: "SOURCE",
    destination_role: "DESTINATION",
    forward: "ENCODER",
    reverse: "DECODER",
    forward_parameter: "ASCII/UTF-8",
    reverse_parameter: "ASCII/UTF-8",
    original: &[Sample {
        text: "A",
        caption: "Character/Symbol",
        glyph: None,
    }],
    transformed: &[Sample {
        text: "01000001",
        caption: "Binary Data",
        glyph: None,
    }],
    channel: "Transmission",
    channel_note: None,
    notes: &[
        Note {
            term: "Encoding",
            detail: "Characters and symbols become binary using standards such as ASCII, UTF-8 or Base64",
        },
        Note {
            term: "Decoding",
            detail: "Binary data becomes readable characters and symbols again",
        },
        Note {
            term: "Example",
            detail: "The letter 'A' is ASCII 65 (decimal) = 01000001 (binary)",
        },
        Note {
            term: "Real-world use",
            detail: "File storage, data transmission, QR codes, barcodes",
        },
    ],
};

static MODULATION: Panel = Panel {
    heading: "Modulator/Demodulator (MODEM)",
    purpose: "Converts digital signals to analog for transmission over analog mediums and back",
    source_role: "DIGITAL SOURCE",
    destination_role: "ANALOG RECEIVER",
    forward: "MODULATOR",
    reverse: "DEMODULATOR",
    forward_parameter: "Carrier Signal",
    reverse_parameter: "Extract Data",
    original: &[Sample {
        text: "101010",
        caption: "Digital Signal",
        glyph: Some(DIGITAL_WAVE),
    }],
    transformed: &[Sample {
        text: "Modulated",
        caption: "Analog Signal",
        glyph: Some(ANALOG_WAVE),
    }],
    channel: "Analog Medium",
    channel_note: Some("(Phone line, Radio)"),
    notes: &[
        Note {
            term: "Modulation",
            detail: "Varies carrier wave amplitude, frequency or phase according to the digital data",
        },
        Note {
            term: "Demodulation",
            detail: "Recovers the original digital information from the modulated analog signal",
        },
        Note {
            term: "Types",
            detail: "AM (Amplitude), FM (Frequency), PM (Phase) modulation",
        },
        Note {
            term: "Real-world use",
            detail: "Dial-up internet, radio broadcasting, Wi-Fi, cellular networks",
        },
    ],
};

static MULTIPLEXING: Panel = Panel {
    heading: "Multiplexor/Demultiplexor (MUX/DEMUX)",
    purpose: "Combines multiple signals into one for efficient transmission, then separates them back",
    source_role: "MULTIPLE SOURCES",
    destination_role: "DESTINATIONS",
    forward: "MUX",
    reverse: "DEMUX",
    forward_parameter: "Combines",
    reverse_parameter: "Separates",
    original: &[
        Sample {
            text: "Signal A",
            caption: "Voice Call",
            glyph: None,
        },
        Sample {
            text: "Signal B",
            caption: "Video Stream",
            glyph: None,
        },
        Sample {
            text: "Signal C",
            caption: "Data Transfer",
            glyph: None,
        },
        Sample {
            text: "Signal D",
            caption: "Web Browsing",
            glyph: None,
        },
    ],
    transformed: &[Sample {
        text: "A|B|C|D|A|B...",
        caption: "Combined Signal",
        glyph: Some("▌▌▌▌▌▌"),
    }],
    channel: "Single Channel",
    channel_note: None,
    notes: &[
        Note {
            term: "Multiplexor (MUX)",
            detail: "Combines several input signals into one output signal",
        },
        Note {
            term: "Demultiplexor (DEMUX)",
            detail: "Splits the combined signal back into the individual signals",
        },
        Note {
            term: "TDM (Time Division)",
            detail: "Each signal gets a time slot (digital phone systems)",
        },
        Note {
            term: "FDM (Frequency Division)",
            detail: "Each signal gets a frequency band (radio and TV broadcasting)",
        },
        Note {
            term: "WDM (Wavelength Division)",
            detail: "Each signal gets a light wavelength (fiber optics)",
        },
        Note {
            term: "Benefit",
            detail: "Maximizes channel utilization and shares expensive transmission media",
        },
    ],
};

static CATALOG: [TopicInfo; 4] = [
    TopicInfo {
        topic: Topic::Encryption,
        id: "encryption-decryption",
        title: "Encryption/Decryption",
        description: "Securing data by converting readable information into scrambled format and back",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 15,
    },
    TopicInfo {
        topic: Topic::Encoding,
        id: "encoding-decoding",
        title: "Encoding/Decoding",
        description: "Converting data into suitable formats for transmission or storage",
        difficulty: Difficulty::Beginner,
        duration_minutes: 12,
    },
    TopicInfo {
        topic: Topic::Modulation,
        id: "modulation-demodulation",
        title: "Modulation/Demodulation",
        description: "Converting digital signals to analog for transmission and back",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 18,
    },
    TopicInfo {
        topic: Topic::Multiplexing,
        id: "multiplexing-demultiplexing",
        title: "Multiplexing/Demultiplexing",
        description: "Combining multiple signals into one and separating them back",
        difficulty: Difficulty::Advanced,
        duration_minutes: 20,
    },
];

/// All catalog entries in display order
pub fn catalog() -> &'static [TopicInfo] {
    &CATALOG
}

impl Topic {
    pub fn info(self) -> &'static TopicInfo {
        &CATALOG[self.index()]
    }

    pub fn panel(self) -> &'static Panel {
        match self {
            Topic::Encryption => &ENCRYPTION,
            Topic::Encoding => &ENCODING,
            Topic::Modulation => &MODULATION,
            Topic::Multiplexing => &MULTIPLEXING,
        }
    }
}
