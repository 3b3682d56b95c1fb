mod float_wav;
mod output;
pub mod pcm;
mod pcm_wav;
mod saver;

pub use {
    float_wav::{FloatWavEncoder, SUPPORTED_BIT_DEPTHS},
    output::{DEFAULT_BASE_NAME, OutputTarget},
    pcm_wav::PcmWavEncoder,
    saver::RecordingSaver,
};
