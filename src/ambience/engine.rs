use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, StreamConfig};
use crossbeam_channel::{bounded, Sender};
use tracing::warn;

use crate::ambience::session::AudioOutput;
use crate::ambience::voice::VoicePool;
use crate::ambience::Note;
use crate::constants::{CHANNEL_CAPACITY, MAX_VOICES, SAMPLE_RATE};
use crate::error::AudioError;
use crate::messages::VoiceCmd;

/// cpal output stream rendering ambience voices.
///
/// All voice state lives inside the output callback; notes arrive over a
/// bounded channel. Dropping this stops the stream.
pub struct CpalOutput {
    stream: cpal::Stream,
    cmd_tx: Sender<VoiceCmd>,
}

impl CpalOutput {
    pub fn open(master_gain: f32) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let config = StreamConfig {
            channels: 2,
            sample_rate: SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        let (cmd_tx, cmd_rx) = bounded::<VoiceCmd>(CHANNEL_CAPACITY);
        let master_gain = master_gain.clamp(0.0, 1.0);
        let mut pool = VoicePool::new(MAX_VOICES, SAMPLE_RATE);
        let channels = config.channels as usize;

        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                while let Ok(cmd) = cmd_rx.try_recv() {
                    match cmd {
                        VoiceCmd::Trigger(freq) => pool.trigger(freq),
                    }
                }
                pool.render(data, channels, master_gain);
            },
            |err| {
                warn!(error = %err, "audio output error");
            },
            None,
        )?;

        stream.play()?;

        Ok(Self { stream, cmd_tx })
    }
}

impl AudioOutput for CpalOutput {
    fn resume(&mut self) -> Result<(), AudioError> {
        self.stream.play()?;
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), AudioError> {
        self.stream.pause()?;
        Ok(())
    }

    fn play(&mut self, note: Note) -> Result<(), AudioError> {
        self.cmd_tx
            .try_send(VoiceCmd::Trigger(note.frequency))
            .map_err(|_| AudioError::Disconnected)
    }
}
