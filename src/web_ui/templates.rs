//! Template engine setup and HTML templates.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Global template engine instance with embedded templates.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    // Embed templates directly in the binary (no external files needed)
    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("index.html", INDEX_TEMPLATE),
        ("uploaded.html", UPLOADED_TEMPLATE),
        ("game.html", GAME_TEMPLATE),
    ])
    .expect("Failed to load templates");

    tera
});

/// Render a template with context
pub fn render(template: &str, context: &Context) -> Result<String, tera::Error> {
    TEMPLATES.render(template, context)
}

// =============================================================================
// Embedded Templates
// =============================================================================

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Flappy Forge{% endblock %}</title>
    <style>
        :root {
            --bg: #70c5ce;
            --panel: #fffbe8;
            --ink: #2b2b2b;
            --accent: #e86a17;
            --border: #543847;
        }

        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--ink);
            line-height: 1.5;
        }

        .container {
            max-width: 720px;
            margin: 0 auto;
            padding: 40px 24px;
        }

        .panel {
            background: var(--panel);
            border: 3px solid var(--border);
            border-radius: 12px;
            padding: 24px;
        }

        h1 { font-size: 28px; margin-bottom: 16px; }
        p { margin-bottom: 12px; }
        a { color: var(--accent); }

        label { display: block; font-weight: 600; margin-top: 12px; }
        input[type=text], input[type=file] { width: 100%; margin-top: 4px; }
        fieldset { border: 1px solid var(--border); border-radius: 8px; padding: 12px; margin-top: 16px; }
        legend { padding: 0 6px; font-weight: 600; }

        button {
            margin-top: 20px;
            padding: 10px 20px;
            background: var(--accent);
            color: white;
            border: 2px solid var(--border);
            border-radius: 8px;
            font-size: 16px;
            cursor: pointer;
        }

        .counter { margin-top: 16px; font-size: 14px; opacity: 0.7; }
        canvas { display: block; margin: 0 auto; border: 3px solid var(--border); border-radius: 8px; }
    </style>
</head>
<body>
    <div class="container">
        {% block content %}{% endblock %}
    </div>
</body>
</html>
"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<div class="panel">
    <h1>Make your own Flappy</h1>
    <form action="/create" method="post" enctype="multipart/form-data">
        <label for="gameName">Game name</label>
        <input type="text" id="gameName" name="gameName" required>

        <label for="creatorName">Your name (optional)</label>
        <input type="text" id="creatorName" name="creatorName">

        <fieldset>
            <legend>Images</legend>
            <label>Background <input type="file" name="background" accept="image/*"></label>
            <label>Bird <input type="file" name="bird" accept="image/*"></label>
            <label>Ground <input type="file" name="ground" accept="image/*"></label>
            <label>Top tube <input type="file" name="tube1" accept="image/*"></label>
            <label>Bottom tube <input type="file" name="tube2" accept="image/*"></label>
        </fieldset>

        <fieldset>
            <legend>Sounds</legend>
            <label>Hit <input type="file" name="hit" accept="audio/mpeg"></label>
            <label>Point <input type="file" name="point" accept="audio/mpeg"></label>
            <label>Wing <input type="file" name="wing" accept="audio/mpeg"></label>
        </fieldset>

        <button type="submit">Create game</button>
    </form>
    <p class="counter"><span id="count">…</span> games created so far</p>
</div>
<script>
    fetch("/count").then(r => r.text()).then(t => { document.getElementById("count").textContent = t; });
</script>
{% endblock %}
"##;

const UPLOADED_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ game_name }} created{% endblock %}
{% block content %}
<div class="panel">
    <h1>{{ game_name }} is ready!</h1>
    <p>Share this link to play:</p>
    <p><a href="/play?id={{ game_id }}">/play?id={{ game_id }}</a></p>
    <p><a href="/">Make another one</a></p>
</div>
{% endblock %}
"##;

const GAME_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ game_name }}{% endblock %}
{% block content %}
<div class="panel">
    <h1>{{ game_name }}</h1>
    {% if game_creator %}<p>by {{ game_creator }}</p>{% endif %}
    <canvas id="game" width="320" height="480"></canvas>
    <p>Click, tap or press space to flap.</p>
</div>
<script>
const GAME = {{ game_json | safe }};

(function () {
    const canvas = document.getElementById("game");
    const ctx = canvas.getContext("2d");
    const W = canvas.width, H = canvas.height, GROUND_H = 80;
    const GAP = 130, TUBE_W = 52, SPEED = 2, GRAVITY = 0.35, FLAP = -6;

    function image(src) {
        if (!src) return null;
        const img = new Image();
        img.src = src;
        return img;
    }
    function sound(flag, name) {
        return flag ? new Audio("/assets/custom/" + GAME.game_id + "/" + name) : null;
    }
    function play(snd) {
        if (snd) { snd.currentTime = 0; snd.play().catch(() => {}); }
    }
    function draw(img, color, x, y, w, h) {
        if (img && img.complete && img.naturalWidth) ctx.drawImage(img, x, y, w, h);
        else { ctx.fillStyle = color; ctx.fillRect(x, y, w, h); }
    }

    const art = {
        background: image(GAME.background), bird: image(GAME.bird), ground: image(GAME.ground),
        tube1: image(GAME.tube1), tube2: image(GAME.tube2),
    };
    const sfx = {
        hit: sound(GAME.sfx_hit, "sfx_hit.mp3"),
        point: sound(GAME.sfx_point, "sfx_point.mp3"),
        wing: sound(GAME.sfx_wing, "sfx_wing.mp3"),
    };

    let bird, tubes, score, state, frame;
    function reset() {
        bird = { x: 60, y: H / 2, vy: 0, size: 28 };
        tubes = []; score = 0; state = "ready"; frame = 0;
    }

    function flap() {
        if (state === "over") { reset(); return; }
        state = "playing";
        bird.vy = FLAP;
        play(sfx.wing);
    }
    canvas.addEventListener("mousedown", flap);
    canvas.addEventListener("touchstart", e => { e.preventDefault(); flap(); });
    document.addEventListener("keydown", e => { if (e.code === "Space") { e.preventDefault(); flap(); } });

    function update() {
        if (state !== "playing") return;
        frame++;
        bird.vy += GRAVITY;
        bird.y += bird.vy;

        if (frame % 90 === 0) {
            const top = 40 + Math.random() * (H - GROUND_H - GAP - 80);
            tubes.push({ x: W, top: top, scored: false });
        }
        tubes.forEach(t => { t.x -= SPEED; });
        tubes = tubes.filter(t => t.x + TUBE_W > 0);

        for (const t of tubes) {
            if (!t.scored && t.x + TUBE_W < bird.x) { t.scored = true; score++; play(sfx.point); }
            const inX = bird.x + bird.size > t.x && bird.x < t.x + TUBE_W;
            const inGap = bird.y > t.top && bird.y + bird.size < t.top + GAP;
            if (inX && !inGap) { state = "over"; play(sfx.hit); }
        }
        if (bird.y + bird.size > H - GROUND_H || bird.y < 0) { state = "over"; play(sfx.hit); }
    }

    function render() {
        draw(art.background, "#70c5ce", 0, 0, W, H);
        for (const t of tubes) {
            draw(art.tube1, "#5ec639", t.x, 0, TUBE_W, t.top);
            draw(art.tube2, "#5ec639", t.x, t.top + GAP, TUBE_W, H - GROUND_H - t.top - GAP);
        }
        draw(art.ground, "#ded895", 0, H - GROUND_H, W, GROUND_H);
        draw(art.bird, "#f7d51d", bird.x, bird.y, bird.size, bird.size);

        ctx.fillStyle = "#fff";
        ctx.strokeStyle = "#543847";
        ctx.font = "bold 32px sans-serif";
        ctx.textAlign = "center";
        ctx.strokeText(score, W / 2, 60);
        ctx.fillText(score, W / 2, 60);
        if (state !== "playing") {
            ctx.font = "bold 20px sans-serif";
            const msg = state === "ready" ? "Tap to start" : "Game over - tap to retry";
            ctx.strokeText(msg, W / 2, H / 2 - 60);
            ctx.fillText(msg, W / 2, H / 2 - 60);
        }
    }

    function loop() { update(); render(); requestAnimationFrame(loop); }
    reset();
    loop();
})();
</script>
{% endblock %}
"##;
