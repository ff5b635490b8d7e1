//! Built-in demo clips shown until a live job has clips of its own

use crate::api::Clip;

pub fn demo_clips() -> Vec<Clip> {
    vec![
        Clip {
            id: "demo-1".to_string(),
            title: "You already have everything you need to start".to_string(),
            score: 0.92,
            thumbnail_url: "https://images.unsplash.com/photo-1525182008055-f88b95ff7980?auto=format&fit=crop&w=600&q=80".to_string(),
            video_url: "https://storage.googleapis.com/coverr-main/mp4/Mt_Baker.mp4".to_string(),
            transcript_snippet: "…that's the moment you hear the smile in their voice. So we keep the mic rolling and hit publish.".to_string(),
            duration: 38.0,
        },
        Clip {
            id: "demo-2".to_string(),
            title: "Cut the noise, keep the spark".to_string(),
            score: 0.87,
            thumbnail_url: "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?auto=format&fit=crop&w=600&q=80".to_string(),
            video_url: "https://storage.googleapis.com/coverr-main/mp4/Night-City.mp4".to_string(),
            transcript_snippet: "Clipper watches for laughs, hooks, or the sentence that hits home. Then it hands you the perfect outtake.".to_string(),
            duration: 31.0,
        },
        Clip {
            id: "demo-3".to_string(),
            title: "From raw conversation to release-ready".to_string(),
            score: 0.9,
            thumbnail_url: "https://images.unsplash.com/photo-1529158062015-cad636e69505?auto=format&fit=crop&w=600&q=80".to_string(),
            video_url: "https://storage.googleapis.com/coverr-main/mp4/Nature-Sky.mp4".to_string(),
            transcript_snippet: "While you take a breath, Clipper is polishing intros, trimming filler, and surfacing quotables.".to_string(),
            duration: 42.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_unique_demo_clips() {
        let clips = demo_clips();
        assert_eq!(clips.len(), 3);
        assert!(clips.iter().all(|c| c.id.starts_with("demo-")));
        assert!(clips.iter().all(|c| (0.0..=1.0).contains(&c.score)));
    }
}
