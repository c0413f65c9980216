use ferrous_root_domain::DomainError;
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder, BinEncodable, BinEncoder};

/// Converts between flat buffers of back-to-back wire-format resource
/// records and owned record sequences.
pub struct RecordCodec;

impl RecordCodec {
    /// Decodes every record in `buf`. The buffer must be consumed exactly;
    /// a partial trailing record is an error, never silently dropped.
    pub fn decode(buf: &[u8]) -> Result<Vec<Record>, DomainError> {
        let mut decoder = BinDecoder::new(buf);
        let mut records = Vec::new();

        while !decoder.is_empty() {
            let offset = decoder.index();
            let record = Record::read(&mut decoder).map_err(|e| {
                DomainError::Codec(format!(
                    "record #{} at offset {}: {}",
                    records.len(),
                    offset,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    pub fn encode(records: &[Record]) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(records.len() * 64);
        {
            let mut encoder = BinEncoder::new(&mut buf);
            for record in records {
                record
                    .emit(&mut encoder)
                    .map_err(|e| DomainError::Codec(e.to_string()))?;
            }
        }
        Ok(buf)
    }
}
