//! Position samples from an NMEA 0183 text stream (serial port, log file).

use std::io::BufRead;

use nmea::{Nmea, SentenceType};
use tracing::{debug, warn};

use crate::error::SensorError;
use crate::position::GeoPoint;

/// Iterator of samples read line by line from `reader`.
///
/// Only sentences that carry a fix produce a sample, and an epoch reported by
/// several of them (GGA + RMC for the same fix time) produces one. A read
/// error is yielded once and ends the feed.
pub struct NmeaFeed<R> {
    reader: R,
    nmea: Nmea,
    line: String,
    last_fix_time: Option<String>,
    finished: bool,
    parse_errors: usize,
}

impl<R: BufRead> NmeaFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            nmea: Nmea::default(),
            line: String::new(),
            last_fix_time: None,
            finished: false,
            parse_errors: 0,
        }
    }

    /// Sentences skipped because they could not be parsed.
    pub fn parse_errors(&self) -> usize {
        self.parse_errors
    }

    /// Feed one sentence to the parser; `Some` when it completes a new fix.
    fn accept(&mut self, sentence: &str) -> Option<GeoPoint> {
        let sentence_type = match self.nmea.parse(sentence) {
            Ok(sentence_type) => sentence_type,
            Err(e) => {
                self.parse_errors += 1;
                warn!("skipping sentence '{}': {}", sentence, e);
                return None;
            }
        };

        if !matches!(
            sentence_type,
            SentenceType::GGA | SentenceType::RMC | SentenceType::GLL | SentenceType::GNS
        ) {
            return None;
        }

        // Receivers keep reporting stale or dead-reckoned coordinates
        // alongside a void/no-fix status.
        if !matches!(self.nmea.fix_type, Some(fix_type) if fix_type.is_valid()) {
            debug!("{:?} with invalid fix {:?}", sentence_type, self.nmea.fix_type);
            return None;
        }

        let (Some(lat), Some(lon)) = (self.nmea.latitude, self.nmea.longitude) else {
            debug!("{:?} without a fix", sentence_type);
            return None;
        };

        let fix_time = self.nmea.fix_time.map(|t| t.to_string());
        if fix_time.is_some() && fix_time == self.last_fix_time {
            return None;
        }
        self.last_fix_time = fix_time;

        Some(GeoPoint::new(lat, lon))
    }
}

impl<R: BufRead> Iterator for NmeaFeed<R> {
    type Item = Result<GeoPoint, SensorError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.finished = true,
                Ok(_) => {
                    let sentence = self.line.trim().to_string();
                    if sentence.is_empty() {
                        continue;
                    }
                    if let Some(point) = self.accept(&sentence) {
                        return Some(Ok(point));
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(SensorError::from(e)));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorErrorKind;
    use std::io::{self, BufReader, Cursor, Read};

    const GGA_1: &str =
        "$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76";
    const RMC_1: &str =
        "$GPRMC,092750.000,A,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,A*43";
    const GGA_2: &str =
        "$GPGGA,092751.000,5321.6802,N,00630.3371,W,1,8,1.03,61.7,M,55.3,M,,*75";
    const RMC_VOID: &str =
        "$GPRMC,092750.000,V,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,N*5B";
    const GGA_NO_FIX: &str =
        "$GPGGA,092750.000,5321.6802,N,00630.3372,W,0,8,1.03,61.7,M,55.2,M,,*77";
    const GSA: &str = "$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A";

    fn feed(lines: &[&str]) -> NmeaFeed<Cursor<String>> {
        NmeaFeed::new(Cursor::new(lines.join("\n")))
    }

    #[test]
    fn test_position_sentences_yield_samples() {
        let samples: Vec<_> = feed(&[GGA_1, GSA, "", GGA_2]).collect();
        assert_eq!(samples.len(), 2);

        let first = samples[0].as_ref().unwrap();
        assert!((first.latitude - 53.361336).abs() < 1e-5);
        assert!((first.longitude + 6.50562).abs() < 1e-5);
    }

    #[test]
    fn test_same_epoch_reported_once() {
        let samples: Vec<_> = feed(&[GGA_1, RMC_1, GGA_2]).collect();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.is_ok()));
    }

    #[test]
    fn test_invalid_fix_is_skipped() {
        assert_eq!(feed(&[RMC_VOID]).count(), 0);
        assert_eq!(feed(&[GGA_NO_FIX]).count(), 0);

        // A valid fix after a dropout is still picked up.
        let samples: Vec<_> = feed(&[GGA_NO_FIX, RMC_VOID, GGA_2]).collect();
        assert_eq!(samples.len(), 1);
        let point = samples[0].as_ref().unwrap();
        assert!((point.longitude + 6.505618).abs() < 1e-5);
    }

    #[test]
    fn test_garbage_is_skipped() {
        let mut feed = feed(&["not nmea at all", "$GPGGA,garbage*00", GGA_1]);
        let samples: Vec<_> = feed.by_ref().collect();
        assert_eq!(samples.len(), 1);
        assert_eq!(feed.parse_errors(), 2);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(feed(&[]).count(), 0);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::TimedOut, "serial timeout"))
        }
    }

    #[test]
    fn test_read_error_ends_feed() {
        let mut feed = NmeaFeed::new(BufReader::new(FailingReader));

        let err = feed.next().unwrap().unwrap_err();
        assert_eq!(err.kind, SensorErrorKind::Timeout);
        assert!(feed.next().is_none());
    }
}
