//! Instruction text sent alongside the two images.

use inpaint_types::TearingStyle;

/// Visual treatment for the masked region, one per style.
pub fn style_fragment(style: TearingStyle) -> &'static str {
    match style {
        TearingStyle::Wild => {
            "Torn Fabric Effect. The edges of the masked material are ragged and frayed, \
             as if the surface layer was ripped open."
        }
        TearingStyle::Burnt => {
            "Burnt Edges. The borders of the masked area are charred, blackened and \
             ash-covered, as if the top layer was burned away."
        }
        TearingStyle::Claw => {
            "Slash Marks. Clean, sharp diagonal cuts run through the masked surface, \
             as if slashed by claws or a blade."
        }
        TearingStyle::Melting => {
            "Surreal Melting. The edges of the masked area drip and dissolve into liquid, \
             creating a surreal opening."
        }
        TearingStyle::Geometric => {
            "Digital Cutout. The masked surface is removed in clean geometric, polygonal \
             shapes, like a digital glitch or a low-poly hole."
        }
        TearingStyle::Paper => {
            "Paper-Cut Collage. The torn section has wide, roughly edged white slits like a \
             paper-cut collage. The edges are white and fibrous, exactly like a glossy \
             photograph torn by hand."
        }
    }
}

/// Full instruction for a masked edit in the given style.
pub fn build_instruction(style: TearingStyle) -> String {
    format!(
        "Task: Artistic inpainting, torn collage effect.

**OBJECTIVE**:
Apply a torn collage effect to the masked area (red pixels) of the base image.
The torn opening reveals an artistic underlayer: a textured, painted or patterned
surface that fits the scene, such as lining material, paper, the background or an
abstract decorative pattern.

**NEGATIVE CONSTRAINTS (STRICTLY FORBIDDEN)**:
- NO hairstyle changes.
- NO background changes outside the mask.
- NO composition changes.
- NO pose changes.
- Do NOT generate external objects (flowers, smoke) unless the style asks for them.
- Do NOT distort the original face features.
- Do NOT depict nudity, underwear or any person being undressed. Clothing under the
  mask must never be replaced by skin.

**ALIGNMENT RULES (HIGHEST PRIORITY)**:
1. **STRUCTURE**: The effect must follow the subject's skeleton and perspective. If the
   surface is twisted or foreshortened, the tear must be too.
2. **VOLUME & DEPTH**: The underlayer lies beneath the torn surface and follows its
   curvature. Do NOT paint it floating above.
3. **NO RE-SHAPING**: Do NOT change the silhouette, proportions or outline of anything
   in the image.

**INPUTS**:
- **Base Image**: reference for pose, lighting, perspective and art style.
- **Mask Image**: the RED area marks the exact region to apply the effect to.

**STYLE MATCHING**:
- Keep the exact art style of the base image (anime stays anime, realism stays realistic).
- Lighting on the revealed layer must match the global lighting direction and intensity.

**TEARING STYLE**:
{}

**EXECUTION**:
Output the full image at the same framing with only the masked area changed. Preserve
everything outside the mask exactly.",
        style_fragment(style)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_distinct_fragment() {
        let mut fragments: Vec<&str> = TearingStyle::ALL.iter().map(|s| style_fragment(*s)).collect();
        fragments.sort_unstable();
        fragments.dedup();
        assert_eq!(fragments.len(), TearingStyle::ALL.len());
    }

    #[test]
    fn test_instruction_embeds_style() {
        let text = build_instruction(TearingStyle::Paper);
        assert!(text.contains("Paper-Cut Collage"));
        assert!(!text.contains("Slash Marks"));
    }

    #[test]
    fn test_instruction_keeps_fixed_constraints() {
        for style in TearingStyle::ALL {
            let text = build_instruction(style);
            assert!(text.contains("NO pose changes"));
            assert!(text.contains("Do NOT depict nudity"));
            assert!(text.contains("**INPUTS**"));
        }
    }
}
