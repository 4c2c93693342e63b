mod temp_audio;

pub use temp_audio::TempAudioStore;
